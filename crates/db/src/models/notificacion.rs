//! Notificacion models and DTOs.
//!
//! A notice sent to a residente. Delivery is outside this system; the
//! document only records what was sent and its reported state.

use condo_core::choices::{NOTIFICACION_ESTADOS, NOTIFICACION_TIPOS};
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `notificacion` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notificacion {
    pub id_notificacion: DocId,
    /// References `residente`.
    pub residente: DocId,
    pub tipo: String,
    pub mensaje: String,
    pub fecha_envio: Timestamp,
    pub estado: String,
}

impl Document for Notificacion {
    const COLLECTION: &'static str = "notificacion";
    const ENTITY: &'static str = "Notificacion";

    fn id(&self) -> &str {
        &self.id_notificacion
    }
}

impl Notificacion {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateNotificacion) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), NOTIFICACION_TIPOS)?;
        validate_optional_choice("estado", update.estado.as_deref(), NOTIFICACION_ESTADOS)?;
        let fecha_envio = parse_optional_timestamp("fecha_envio", update.fecha_envio.as_deref())?;

        if let Some(residente) = update.residente {
            self.residente = residente;
        }
        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(mensaje) = update.mensaje {
            self.mensaje = mensaje;
        }
        if let Some(fecha) = fecha_envio {
            self.fecha_envio = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

/// DTO for creating a notificacion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNotificacion {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub mensaje: Option<String>,
    pub fecha_envio: Option<String>,
    pub estado: Option<String>,
}

impl CreateNotificacion {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Notificacion, CoreError> {
        let residente = required(self.residente, "residente")?;
        let tipo = required(self.tipo, "tipo")?;
        let mensaje = required(self.mensaje, "mensaje")?;
        let fecha_envio = required(self.fecha_envio, "fecha_envio")?;
        let estado = required(self.estado, "estado")?;

        validate_choice("tipo", &tipo, NOTIFICACION_TIPOS)?;
        let fecha_envio = parse_timestamp("fecha_envio", &fecha_envio)?;
        validate_choice("estado", &estado, NOTIFICACION_ESTADOS)?;

        Ok(Notificacion {
            id_notificacion: id,
            residente,
            tipo,
            mensaje,
            fecha_envio,
            estado,
        })
    }
}

/// DTO for partially updating a notificacion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNotificacion {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub mensaje: Option<String>,
    pub fecha_envio: Option<String>,
    pub estado: Option<String>,
}
