//! Propietario models and DTOs.
//!
//! A propietario owns one or more units. The RUT is a natural key.

use condo_core::error::CoreError;
use condo_core::types::DocId;
use condo_core::validation::{required, validate_email, validate_rut};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `propietario` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propietario {
    pub id_propietario: DocId,
    pub nombre: String,
    pub apepat: String,
    pub apemat: String,
    pub rut: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
}

impl Document for Propietario {
    const COLLECTION: &'static str = "propietario";
    const ENTITY: &'static str = "Propietario";

    fn id(&self) -> &str {
        &self.id_propietario
    }
}

impl Propietario {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdatePropietario) -> Result<(), CoreError> {
        if let Some(rut) = update.rut.as_deref() {
            validate_rut(rut)?;
        }
        if let Some(email) = update.email.as_deref() {
            validate_email(email)?;
        }

        if let Some(nombre) = update.nombre {
            self.nombre = nombre;
        }
        if let Some(apepat) = update.apepat {
            self.apepat = apepat;
        }
        if let Some(apemat) = update.apemat {
            self.apemat = apemat;
        }
        if let Some(rut) = update.rut {
            self.rut = rut;
        }
        if let Some(telefono) = update.telefono {
            self.telefono = telefono;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(direccion) = update.direccion {
            self.direccion = direccion;
        }
        Ok(())
    }
}

/// DTO for creating a propietario.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePropietario {
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub rut: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}

impl CreatePropietario {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Propietario, CoreError> {
        let nombre = required(self.nombre, "nombre")?;
        let apepat = required(self.apepat, "apepat")?;
        let apemat = required(self.apemat, "apemat")?;
        let rut = required(self.rut, "rut")?;
        let telefono = required(self.telefono, "telefono")?;
        let email = required(self.email, "email")?;
        let direccion = required(self.direccion, "direccion")?;

        validate_rut(&rut)?;
        validate_email(&email)?;

        Ok(Propietario {
            id_propietario: id,
            nombre,
            apepat,
            apemat,
            rut,
            telefono,
            email,
            direccion,
        })
    }
}

/// DTO for partially updating a propietario.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePropietario {
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub rut: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreatePropietario {
        CreatePropietario {
            nombre: Some("Marta".into()),
            apepat: Some("Pino".into()),
            apemat: Some("Lagos".into()),
            rut: Some("12345678-5".into()),
            telefono: Some("+56933334444".into()),
            email: Some("marta.pino@example.com".into()),
            direccion: Some("Av. Providencia 1234".into()),
        }
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreatePropietario {
            rut: None,
            direccion: None,
            ..full_create()
        };
        let err = input.into_document("o1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'rut'"));
    }

    #[test]
    fn into_document_rejects_malformed_rut() {
        let input = CreatePropietario {
            rut: Some("12.345.678-5".into()),
            ..full_create()
        };
        let err = input.into_document("o1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("rut"));
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut doc = full_create().into_document("o1".into()).unwrap();
        doc.apply(UpdatePropietario {
            telefono: Some("+56955556666".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(doc.telefono, "+56955556666");
        assert_eq!(doc.rut, "12345678-5");
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_rut() {
        let mut doc = full_create().into_document("o1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdatePropietario {
            nombre: Some("Marcela".into()),
            rut: Some("abc".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
