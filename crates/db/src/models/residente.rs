//! Residente models and DTOs.
//!
//! A residente lives in a departamento. The RUT is a natural key.

use condo_core::error::CoreError;
use condo_core::types::DocId;
use condo_core::validation::{required, validate_email, validate_rut};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `residente` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residente {
    pub id_residente: DocId,
    /// References `departamento`.
    pub departamento: DocId,
    pub nombre: String,
    pub rut: String,
    pub apepat: String,
    pub apemat: String,
    pub telefono: String,
    pub email: String,
}

impl Document for Residente {
    const COLLECTION: &'static str = "residente";
    const ENTITY: &'static str = "Residente";

    fn id(&self) -> &str {
        &self.id_residente
    }
}

impl Residente {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateResidente) -> Result<(), CoreError> {
        if let Some(rut) = update.rut.as_deref() {
            validate_rut(rut)?;
        }
        if let Some(email) = update.email.as_deref() {
            validate_email(email)?;
        }

        if let Some(departamento) = update.departamento {
            self.departamento = departamento;
        }
        if let Some(nombre) = update.nombre {
            self.nombre = nombre;
        }
        if let Some(rut) = update.rut {
            self.rut = rut;
        }
        if let Some(apepat) = update.apepat {
            self.apepat = apepat;
        }
        if let Some(apemat) = update.apemat {
            self.apemat = apemat;
        }
        if let Some(telefono) = update.telefono {
            self.telefono = telefono;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}

/// DTO for creating a residente.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResidente {
    pub departamento: Option<DocId>,
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub rut: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

impl CreateResidente {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Residente, CoreError> {
        let departamento = required(self.departamento, "departamento")?;
        let nombre = required(self.nombre, "nombre")?;
        let apepat = required(self.apepat, "apepat")?;
        let apemat = required(self.apemat, "apemat")?;
        let rut = required(self.rut, "rut")?;
        let telefono = required(self.telefono, "telefono")?;
        let email = required(self.email, "email")?;

        validate_rut(&rut)?;
        validate_email(&email)?;

        Ok(Residente {
            id_residente: id,
            departamento,
            nombre,
            rut,
            apepat,
            apemat,
            telefono,
            email,
        })
    }
}

/// DTO for partially updating a residente.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResidente {
    pub departamento: Option<DocId>,
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub rut: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}
