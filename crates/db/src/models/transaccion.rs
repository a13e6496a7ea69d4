//! Transaccion models and DTOs.
//!
//! A ledger entry (income or expense), optionally tied to a departamento.

use condo_core::choices::TRANSACCION_TIPOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `transaccion` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaccion {
    pub id_transaccion: DocId,
    pub tipo: String,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: Timestamp,
    /// References `departamento`.
    pub departamento: Option<DocId>,
}

impl Document for Transaccion {
    const COLLECTION: &'static str = "transaccion";
    const ENTITY: &'static str = "Transaccion";

    fn id(&self) -> &str {
        &self.id_transaccion
    }
}

impl Transaccion {
    pub fn apply(&mut self, update: UpdateTransaccion) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), TRANSACCION_TIPOS)?;
        let fecha = parse_optional_timestamp("fecha", update.fecha.as_deref())?;

        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(monto) = update.monto {
            self.monto = monto;
        }
        if let Some(fecha) = fecha {
            self.fecha = fecha;
        }
        if update.departamento.is_some() {
            self.departamento = update.departamento;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransaccion {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub departamento: Option<DocId>,
}

impl CreateTransaccion {
    pub fn into_document(self, id: DocId) -> Result<Transaccion, CoreError> {
        let tipo = required(self.tipo, "tipo")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let monto = required(self.monto, "monto")?;
        let fecha = required(self.fecha, "fecha")?;

        validate_choice("tipo", &tipo, TRANSACCION_TIPOS)?;
        let fecha = parse_timestamp("fecha", &fecha)?;

        Ok(Transaccion {
            id_transaccion: id,
            tipo,
            descripcion,
            monto,
            fecha,
            departamento: self.departamento,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransaccion {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub departamento: Option<DocId>,
}
