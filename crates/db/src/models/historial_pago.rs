//! HistorialPago models and DTOs.
//!
//! Individual settlement attempts recorded against a pago.

use condo_core::choices::{HISTORIAL_PAGO_ESTADOS, HISTORIAL_PAGO_METODOS};
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `historialpago` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorialPago {
    pub id_historial_pago: DocId,
    /// References `pago`.
    pub pago: DocId,
    pub fecha_pago: Timestamp,
    pub monto_pagado: f64,
    pub metodo_pago: String,
    /// External reference (bank transfer number, voucher, ...).
    pub referencia_pago: Option<String>,
    pub estado: String,
}

impl Document for HistorialPago {
    const COLLECTION: &'static str = "historialpago";
    const ENTITY: &'static str = "HistorialPago";

    fn id(&self) -> &str {
        &self.id_historial_pago
    }
}

impl HistorialPago {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateHistorialPago) -> Result<(), CoreError> {
        validate_optional_choice(
            "metodo_pago",
            update.metodo_pago.as_deref(),
            HISTORIAL_PAGO_METODOS,
        )?;
        validate_optional_choice("estado", update.estado.as_deref(), HISTORIAL_PAGO_ESTADOS)?;
        let fecha_pago = parse_optional_timestamp("fecha_pago", update.fecha_pago.as_deref())?;

        if let Some(pago) = update.pago {
            self.pago = pago;
        }
        if let Some(fecha) = fecha_pago {
            self.fecha_pago = fecha;
        }
        if let Some(monto) = update.monto_pagado {
            self.monto_pagado = monto;
        }
        if let Some(metodo) = update.metodo_pago {
            self.metodo_pago = metodo;
        }
        if update.referencia_pago.is_some() {
            self.referencia_pago = update.referencia_pago;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

/// DTO for creating a payment history entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHistorialPago {
    pub pago: Option<DocId>,
    pub fecha_pago: Option<String>,
    pub monto_pagado: Option<f64>,
    pub metodo_pago: Option<String>,
    pub referencia_pago: Option<String>,
    pub estado: Option<String>,
}

impl CreateHistorialPago {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<HistorialPago, CoreError> {
        let pago = required(self.pago, "pago")?;
        let fecha_pago = required(self.fecha_pago, "fecha_pago")?;
        let monto_pagado = required(self.monto_pagado, "monto_pagado")?;
        let metodo_pago = required(self.metodo_pago, "metodo_pago")?;
        let estado = required(self.estado, "estado")?;

        let fecha_pago = parse_timestamp("fecha_pago", &fecha_pago)?;
        validate_choice("metodo_pago", &metodo_pago, HISTORIAL_PAGO_METODOS)?;
        validate_choice("estado", &estado, HISTORIAL_PAGO_ESTADOS)?;

        Ok(HistorialPago {
            id_historial_pago: id,
            pago,
            fecha_pago,
            monto_pagado,
            metodo_pago,
            referencia_pago: self.referencia_pago,
            estado,
        })
    }
}

/// DTO for partially updating a payment history entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHistorialPago {
    pub pago: Option<DocId>,
    pub fecha_pago: Option<String>,
    pub monto_pagado: Option<f64>,
    pub metodo_pago: Option<String>,
    pub referencia_pago: Option<String>,
    pub estado: Option<String>,
}
