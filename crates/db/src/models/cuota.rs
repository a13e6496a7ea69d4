//! Cuota models and DTOs.
//!
//! A cuota is a periodic fee charged to a departamento.

use condo_core::choices::CUOTA_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `cuota` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuota {
    pub id_cuota: DocId,
    /// References `departamento`.
    pub departamento: DocId,
    pub monto: f64,
    pub periodo: String,
    pub fecha_vencimiento: Timestamp,
    pub estado: String,
}

impl Document for Cuota {
    const COLLECTION: &'static str = "cuota";
    const ENTITY: &'static str = "Cuota";

    fn id(&self) -> &str {
        &self.id_cuota
    }
}

impl Cuota {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateCuota) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), CUOTA_ESTADOS)?;
        let fecha_vencimiento =
            parse_optional_timestamp("fecha_vencimiento", update.fecha_vencimiento.as_deref())?;

        if let Some(departamento) = update.departamento {
            self.departamento = departamento;
        }
        if let Some(monto) = update.monto {
            self.monto = monto;
        }
        if let Some(periodo) = update.periodo {
            self.periodo = periodo;
        }
        if let Some(fecha) = fecha_vencimiento {
            self.fecha_vencimiento = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

/// DTO for creating a cuota.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCuota {
    pub departamento: Option<DocId>,
    pub monto: Option<f64>,
    pub periodo: Option<String>,
    pub fecha_vencimiento: Option<String>,
    pub estado: Option<String>,
}

impl CreateCuota {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Cuota, CoreError> {
        let departamento = required(self.departamento, "departamento")?;
        let monto = required(self.monto, "monto")?;
        let periodo = required(self.periodo, "periodo")?;
        let fecha_vencimiento = required(self.fecha_vencimiento, "fecha_vencimiento")?;
        let estado = required(self.estado, "estado")?;

        let fecha_vencimiento = parse_timestamp("fecha_vencimiento", &fecha_vencimiento)?;
        validate_choice("estado", &estado, CUOTA_ESTADOS)?;

        Ok(Cuota {
            id_cuota: id,
            departamento,
            monto,
            periodo,
            fecha_vencimiento,
            estado,
        })
    }
}

/// DTO for partially updating a cuota.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCuota {
    pub departamento: Option<DocId>,
    pub monto: Option<f64>,
    pub periodo: Option<String>,
    pub fecha_vencimiento: Option<String>,
    pub estado: Option<String>,
}
