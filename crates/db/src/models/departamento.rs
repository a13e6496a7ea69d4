//! Departamento models and DTOs.
//!
//! A departamento is a unit in the building. Its `numero` is a natural key.

use condo_core::choices::{DEPARTAMENTO_ESTADOS, DEPARTAMENTO_TIPOS};
use condo_core::error::CoreError;
use condo_core::types::DocId;
use condo_core::validation::{required, validate_choice, validate_optional_choice};
use serde::{Deserialize, Serialize};

use super::Document;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A document from the `departamento` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departamento {
    pub id_departamento: DocId,
    pub numero: String,
    pub piso: f64,
    pub tipo: String,
    pub superficie: f64,
    pub estado: String,
}

impl Document for Departamento {
    const COLLECTION: &'static str = "departamento";
    const ENTITY: &'static str = "Departamento";

    fn id(&self) -> &str {
        &self.id_departamento
    }
}

impl Departamento {
    /// Merge the provided fields of `update` into this document.
    ///
    /// All provided values are validated before anything is changed.
    pub fn apply(&mut self, update: UpdateDepartamento) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), DEPARTAMENTO_TIPOS)?;
        validate_optional_choice("estado", update.estado.as_deref(), DEPARTAMENTO_ESTADOS)?;

        if let Some(numero) = update.numero {
            self.numero = numero;
        }
        if let Some(piso) = update.piso {
            self.piso = piso;
        }
        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(superficie) = update.superficie {
            self.superficie = superficie;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a departamento.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDepartamento {
    pub numero: Option<String>,
    pub piso: Option<f64>,
    pub tipo: Option<String>,
    pub superficie: Option<f64>,
    pub estado: Option<String>,
}

impl CreateDepartamento {
    /// Check required fields and value sets, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Departamento, CoreError> {
        let numero = required(self.numero, "numero")?;
        let piso = required(self.piso, "piso")?;
        let tipo = required(self.tipo, "tipo")?;
        let superficie = required(self.superficie, "superficie")?;
        let estado = required(self.estado, "estado")?;

        validate_choice("tipo", &tipo, DEPARTAMENTO_TIPOS)?;
        validate_choice("estado", &estado, DEPARTAMENTO_ESTADOS)?;

        Ok(Departamento {
            id_departamento: id,
            numero,
            piso,
            tipo,
            superficie,
            estado,
        })
    }
}

/// DTO for partially updating a departamento.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartamento {
    pub numero: Option<String>,
    pub piso: Option<f64>,
    pub tipo: Option<String>,
    pub superficie: Option<f64>,
    pub estado: Option<String>,
}
