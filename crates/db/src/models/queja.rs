//! Queja (complaint) models and DTOs.

use condo_core::choices::QUEJA_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `queja` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Queja {
    pub id_queja: DocId,
    /// References `residente`.
    pub residente: DocId,
    pub descripcion: String,
    pub fecha_creacion: Timestamp,
    pub estado: String,
    pub fecha_resolucion: Option<Timestamp>,
    /// References `personal`.
    pub personal: Option<DocId>,
}

impl Document for Queja {
    const COLLECTION: &'static str = "queja";
    const ENTITY: &'static str = "Queja";

    fn id(&self) -> &str {
        &self.id_queja
    }
}

impl Queja {
    pub fn apply(&mut self, update: UpdateQueja) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), QUEJA_ESTADOS)?;
        let fecha_creacion =
            parse_optional_timestamp("fecha_creacion", update.fecha_creacion.as_deref())?;
        let fecha_resolucion =
            parse_optional_timestamp("fecha_resolucion", update.fecha_resolucion.as_deref())?;

        if let Some(residente) = update.residente {
            self.residente = residente;
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
        if fecha_resolucion.is_some() {
            self.fecha_resolucion = fecha_resolucion;
        }
        if update.personal.is_some() {
            self.personal = update.personal;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQueja {
    pub residente: Option<DocId>,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
    pub fecha_resolucion: Option<String>,
    pub personal: Option<DocId>,
}

impl CreateQueja {
    pub fn into_document(self, id: DocId) -> Result<Queja, CoreError> {
        let residente = required(self.residente, "residente")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let fecha_creacion = required(self.fecha_creacion, "fecha_creacion")?;
        let estado = required(self.estado, "estado")?;

        let fecha_creacion = parse_timestamp("fecha_creacion", &fecha_creacion)?;
        validate_choice("estado", &estado, QUEJA_ESTADOS)?;
        let fecha_resolucion =
            parse_optional_timestamp("fecha_resolucion", self.fecha_resolucion.as_deref())?;

        Ok(Queja {
            id_queja: id,
            residente,
            descripcion,
            fecha_creacion,
            estado,
            fecha_resolucion,
            personal: self.personal,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQueja {
    pub residente: Option<DocId>,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
    pub fecha_resolucion: Option<String>,
    pub personal: Option<DocId>,
}
