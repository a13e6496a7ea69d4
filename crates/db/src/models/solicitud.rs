//! Solicitud models and DTOs.
//!
//! A service request raised by a residente, optionally assigned to staff.

use condo_core::choices::{SOLICITUD_ESTADOS, SOLICITUD_PRIORIDADES, SOLICITUD_TIPOS};
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `solicitud` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solicitud {
    pub id_solicitud: DocId,
    /// References `residente`.
    pub residente: DocId,
    pub tipo: String,
    pub descripcion: String,
    pub fecha_creacion: Timestamp,
    pub estado: String,
    pub prioridad: String,
    /// References `personal`.
    pub personal: Option<DocId>,
}

impl Document for Solicitud {
    const COLLECTION: &'static str = "solicitud";
    const ENTITY: &'static str = "Solicitud";

    fn id(&self) -> &str {
        &self.id_solicitud
    }
}

impl Solicitud {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateSolicitud) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), SOLICITUD_TIPOS)?;
        validate_optional_choice("estado", update.estado.as_deref(), SOLICITUD_ESTADOS)?;
        validate_optional_choice("prioridad", update.prioridad.as_deref(), SOLICITUD_PRIORIDADES)?;
        let fecha_creacion =
            parse_optional_timestamp("fecha_creacion", update.fecha_creacion.as_deref())?;

        if let Some(residente) = update.residente {
            self.residente = residente;
        }
        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(fecha) = fecha_creacion {
            self.fecha_creacion = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        if let Some(prioridad) = update.prioridad {
            self.prioridad = prioridad;
        }
        if update.personal.is_some() {
            self.personal = update.personal;
        }
        Ok(())
    }
}

/// DTO for creating a solicitud.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSolicitud {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
    pub prioridad: Option<String>,
    pub personal: Option<DocId>,
}

impl CreateSolicitud {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Solicitud, CoreError> {
        let residente = required(self.residente, "residente")?;
        let tipo = required(self.tipo, "tipo")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let fecha_creacion = required(self.fecha_creacion, "fecha_creacion")?;
        let estado = required(self.estado, "estado")?;
        let prioridad = required(self.prioridad, "prioridad")?;

        validate_choice("tipo", &tipo, SOLICITUD_TIPOS)?;
        let fecha_creacion = parse_timestamp("fecha_creacion", &fecha_creacion)?;
        validate_choice("estado", &estado, SOLICITUD_ESTADOS)?;
        validate_choice("prioridad", &prioridad, SOLICITUD_PRIORIDADES)?;

        Ok(Solicitud {
            id_solicitud: id,
            residente,
            tipo,
            descripcion,
            fecha_creacion,
            estado,
            prioridad,
            personal: self.personal,
        })
    }
}

/// DTO for partially updating a solicitud.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSolicitud {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
    pub prioridad: Option<String>,
    pub personal: Option<DocId>,
}
