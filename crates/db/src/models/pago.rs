//! Pago models and DTOs.
//!
//! A pago records a payment made for a departamento in a billing period.

use condo_core::choices::PAGO_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `pago` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    pub id_pago: DocId,
    /// References `departamento`.
    pub departamento: DocId,
    pub monto: f64,
    pub fecha_pago: Timestamp,
    pub periodo: String,
    pub estado: String,
}

impl Document for Pago {
    const COLLECTION: &'static str = "pago";
    const ENTITY: &'static str = "Pago";

    fn id(&self) -> &str {
        &self.id_pago
    }
}

impl Pago {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdatePago) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), PAGO_ESTADOS)?;
        let fecha_pago = parse_optional_timestamp("fecha_pago", update.fecha_pago.as_deref())?;

        if let Some(departamento) = update.departamento {
            self.departamento = departamento;
        }
        if let Some(monto) = update.monto {
            self.monto = monto;
        }
        if let Some(fecha) = fecha_pago {
            self.fecha_pago = fecha;
        }
        if let Some(periodo) = update.periodo {
            self.periodo = periodo;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

/// DTO for creating a pago.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePago {
    pub departamento: Option<DocId>,
    pub monto: Option<f64>,
    pub fecha_pago: Option<String>,
    pub periodo: Option<String>,
    pub estado: Option<String>,
}

impl CreatePago {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Pago, CoreError> {
        let departamento = required(self.departamento, "departamento")?;
        let monto = required(self.monto, "monto")?;
        let fecha_pago = required(self.fecha_pago, "fecha_pago")?;
        let periodo = required(self.periodo, "periodo")?;
        let estado = required(self.estado, "estado")?;

        let fecha_pago = parse_timestamp("fecha_pago", &fecha_pago)?;
        validate_choice("estado", &estado, PAGO_ESTADOS)?;

        Ok(Pago {
            id_pago: id,
            departamento,
            monto,
            fecha_pago,
            periodo,
            estado,
        })
    }
}

/// DTO for partially updating a pago.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePago {
    pub departamento: Option<DocId>,
    pub monto: Option<f64>,
    pub fecha_pago: Option<String>,
    pub periodo: Option<String>,
    pub estado: Option<String>,
}
