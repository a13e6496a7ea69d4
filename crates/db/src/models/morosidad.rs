//! Morosidad (delinquency) models and DTOs.
//!
//! A morosidad tracks an overdue pago: the outstanding amount, accrued
//! interest and, once settled, the cancellation date.

use condo_core::choices::MOROSIDAD_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `morosidad` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Morosidad {
    pub id_morosidad: DocId,
    /// References `pago`.
    pub pago: DocId,
    pub monto_atrasado: f64,
    pub fecha_retraso: Timestamp,
    pub intereses: f64,
    pub estado: String,
    pub fecha_cancelacion: Option<Timestamp>,
}

impl Document for Morosidad {
    const COLLECTION: &'static str = "morosidad";
    const ENTITY: &'static str = "Morosidad";

    fn id(&self) -> &str {
        &self.id_morosidad
    }
}

impl Morosidad {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateMorosidad) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), MOROSIDAD_ESTADOS)?;
        let fecha_retraso =
            parse_optional_timestamp("fecha_retraso", update.fecha_retraso.as_deref())?;
        let fecha_cancelacion =
            parse_optional_timestamp("fecha_cancelacion", update.fecha_cancelacion.as_deref())?;

        if let Some(pago) = update.pago {
            self.pago = pago;
        }
        if let Some(monto) = update.monto_atrasado {
            self.monto_atrasado = monto;
        }
        if let Some(fecha) = fecha_retraso {
            self.fecha_retraso = fecha;
        }
        if let Some(intereses) = update.intereses {
            self.intereses = intereses;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        if fecha_cancelacion.is_some() {
            self.fecha_cancelacion = fecha_cancelacion;
        }
        Ok(())
    }
}

/// DTO for creating a morosidad.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMorosidad {
    pub pago: Option<DocId>,
    pub monto_atrasado: Option<f64>,
    pub fecha_retraso: Option<String>,
    pub intereses: Option<f64>,
    pub estado: Option<String>,
    pub fecha_cancelacion: Option<String>,
}

impl CreateMorosidad {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Morosidad, CoreError> {
        let pago = required(self.pago, "pago")?;
        let monto_atrasado = required(self.monto_atrasado, "monto_atrasado")?;
        let fecha_retraso = required(self.fecha_retraso, "fecha_retraso")?;
        let intereses = required(self.intereses, "intereses")?;
        let estado = required(self.estado, "estado")?;

        let fecha_retraso = parse_timestamp("fecha_retraso", &fecha_retraso)?;
        validate_choice("estado", &estado, MOROSIDAD_ESTADOS)?;
        let fecha_cancelacion =
            parse_optional_timestamp("fecha_cancelacion", self.fecha_cancelacion.as_deref())?;

        Ok(Morosidad {
            id_morosidad: id,
            pago,
            monto_atrasado,
            fecha_retraso,
            intereses,
            estado,
            fecha_cancelacion,
        })
    }
}

/// DTO for partially updating a morosidad.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMorosidad {
    pub pago: Option<DocId>,
    pub monto_atrasado: Option<f64>,
    pub fecha_retraso: Option<String>,
    pub intereses: Option<f64>,
    pub estado: Option<String>,
    pub fecha_cancelacion: Option<String>,
}
