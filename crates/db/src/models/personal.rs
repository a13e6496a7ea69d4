//! Personal (staff) models and DTOs.
//!
//! Staff members are identified by their email, which is a natural key.

use condo_core::choices::PERSONAL_CARGOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice, validate_email,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `personal` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub id_personal: DocId,
    pub nombre: String,
    pub apepat: String,
    pub apemat: String,
    pub cargo: String,
    pub telefono: String,
    pub email: String,
    pub fecha_contratacion: Timestamp,
}

impl Document for Personal {
    const COLLECTION: &'static str = "personal";
    const ENTITY: &'static str = "Personal";

    fn id(&self) -> &str {
        &self.id_personal
    }
}

impl Personal {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdatePersonal) -> Result<(), CoreError> {
        validate_optional_choice("cargo", update.cargo.as_deref(), PERSONAL_CARGOS)?;
        if let Some(email) = update.email.as_deref() {
            validate_email(email)?;
        }
        let fecha_contratacion =
            parse_optional_timestamp("fecha_contratacion", update.fecha_contratacion.as_deref())?;

        if let Some(nombre) = update.nombre {
            self.nombre = nombre;
        }
        if let Some(apepat) = update.apepat {
            self.apepat = apepat;
        }
        if let Some(apemat) = update.apemat {
            self.apemat = apemat;
        }
        if let Some(cargo) = update.cargo {
            self.cargo = cargo;
        }
        if let Some(telefono) = update.telefono {
            self.telefono = telefono;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(fecha) = fecha_contratacion {
            self.fecha_contratacion = fecha;
        }
        Ok(())
    }
}

/// DTO for creating a staff member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePersonal {
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub cargo: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub fecha_contratacion: Option<String>,
}

impl CreatePersonal {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Personal, CoreError> {
        let nombre = required(self.nombre, "nombre")?;
        let apepat = required(self.apepat, "apepat")?;
        let apemat = required(self.apemat, "apemat")?;
        let cargo = required(self.cargo, "cargo")?;
        let telefono = required(self.telefono, "telefono")?;
        let email = required(self.email, "email")?;
        let fecha_contratacion = required(self.fecha_contratacion, "fecha_contratacion")?;

        validate_choice("cargo", &cargo, PERSONAL_CARGOS)?;
        validate_email(&email)?;
        let fecha_contratacion = parse_timestamp("fecha_contratacion", &fecha_contratacion)?;

        Ok(Personal {
            id_personal: id,
            nombre,
            apepat,
            apemat,
            cargo,
            telefono,
            email,
            fecha_contratacion,
        })
    }
}

/// DTO for partially updating a staff member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonal {
    pub nombre: Option<String>,
    pub apepat: Option<String>,
    pub apemat: Option<String>,
    pub cargo: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub fecha_contratacion: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreatePersonal {
        CreatePersonal {
            nombre: Some("Luis".into()),
            apepat: Some("Soto".into()),
            apemat: Some("Vera".into()),
            cargo: Some("Conserje".into()),
            telefono: Some("+56911112222".into()),
            email: Some("luis.soto@example.com".into()),
            fecha_contratacion: Some("2024-03-01".into()),
        }
    }

    #[test]
    fn into_document_builds_complete_document() {
        let doc = full_create().into_document("s1".into()).unwrap();
        assert_eq!(doc.id(), "s1");
        assert_eq!(doc.cargo, "Conserje");
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreatePersonal {
            apemat: None,
            email: None,
            ..full_create()
        };
        let err = input.into_document("s1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'apemat'"));
    }

    #[test]
    fn into_document_rejects_invalid_email() {
        let input = CreatePersonal {
            email: Some("luis.soto".into()),
            ..full_create()
        };
        let err = input.into_document("s1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("email"));
    }

    #[test]
    fn into_document_rejects_unknown_cargo() {
        let input = CreatePersonal {
            cargo: Some("Gerente".into()),
            ..full_create()
        };
        assert!(input.into_document("s1".into()).is_err());
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_email() {
        let mut doc = full_create().into_document("s1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdatePersonal {
            cargo: Some("Mantenimiento".into()),
            email: Some("not-an-email".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);

        doc.apply(UpdatePersonal {
            cargo: Some("Mantenimiento".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(doc.cargo, "Mantenimiento");
        assert_eq!(doc.email, "luis.soto@example.com");
    }
}
