//! Mantenimiento models and DTOs.
//!
//! A maintenance job, optionally assigned to a staff member.

use condo_core::choices::MANTENIMIENTO_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `mantenimiento` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mantenimiento {
    pub id_mantenimiento: DocId,
    /// Free-form job type (not restricted to a value set).
    pub tipo: String,
    pub descripcion: String,
    pub fecha_inicio: Timestamp,
    pub fecha_fin: Timestamp,
    pub costo: f64,
    /// References `personal`.
    pub personal: Option<DocId>,
    pub estado: String,
}

impl Document for Mantenimiento {
    const COLLECTION: &'static str = "mantenimiento";
    const ENTITY: &'static str = "Mantenimiento";

    fn id(&self) -> &str {
        &self.id_mantenimiento
    }
}

impl Mantenimiento {
    /// Merge the provided fields of `update` into this document.
    pub fn apply(&mut self, update: UpdateMantenimiento) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), MANTENIMIENTO_ESTADOS)?;
        let fecha_inicio = parse_optional_timestamp("fecha_inicio", update.fecha_inicio.as_deref())?;
        let fecha_fin = parse_optional_timestamp("fecha_fin", update.fecha_fin.as_deref())?;

        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(fecha) = fecha_inicio {
            self.fecha_inicio = fecha;
        }
        if let Some(fecha) = fecha_fin {
            self.fecha_fin = fecha;
        }
        if let Some(costo) = update.costo {
            self.costo = costo;
        }
        if update.personal.is_some() {
            self.personal = update.personal;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

/// DTO for creating a maintenance job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMantenimiento {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub costo: Option<f64>,
    pub personal: Option<DocId>,
    pub estado: Option<String>,
}

impl CreateMantenimiento {
    /// Check required fields and formats, producing the document to store.
    pub fn into_document(self, id: DocId) -> Result<Mantenimiento, CoreError> {
        let tipo = required(self.tipo, "tipo")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let fecha_inicio = required(self.fecha_inicio, "fecha_inicio")?;
        let fecha_fin = required(self.fecha_fin, "fecha_fin")?;
        let costo = required(self.costo, "costo")?;
        let estado = required(self.estado, "estado")?;

        let fecha_inicio = parse_timestamp("fecha_inicio", &fecha_inicio)?;
        let fecha_fin = parse_timestamp("fecha_fin", &fecha_fin)?;
        validate_choice("estado", &estado, MANTENIMIENTO_ESTADOS)?;

        Ok(Mantenimiento {
            id_mantenimiento: id,
            tipo,
            descripcion,
            fecha_inicio,
            fecha_fin,
            costo,
            personal: self.personal,
            estado,
        })
    }
}

/// DTO for partially updating a maintenance job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMantenimiento {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub costo: Option<f64>,
    pub personal: Option<DocId>,
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreateMantenimiento {
        CreateMantenimiento {
            tipo: Some("Ascensor".into()),
            descripcion: Some("Revision anual".into()),
            fecha_inicio: Some("2026-11-02".into()),
            fecha_fin: Some("2026-11-03".into()),
            costo: Some(300_000.0),
            personal: Some("s1".into()),
            estado: Some("Pendiente".into()),
        }
    }

    #[test]
    fn into_document_builds_complete_document() {
        let doc = full_create().into_document("m1".into()).unwrap();
        assert_eq!(doc.id(), "m1");
        assert_eq!(doc.personal.as_deref(), Some("s1"));
        assert!(doc.fecha_inicio < doc.fecha_fin);
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreateMantenimiento {
            fecha_fin: None,
            costo: None,
            ..full_create()
        };
        let err = input.into_document("m1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'fecha_fin'"));
    }

    #[test]
    fn into_document_rejects_unknown_estado() {
        let input = CreateMantenimiento {
            estado: Some("Completada".into()),
            ..full_create()
        };
        assert!(input.into_document("m1".into()).is_err());
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut doc = full_create().into_document("m1".into()).unwrap();
        doc.apply(UpdateMantenimiento {
            estado: Some("En Proceso".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(doc.estado, "En Proceso");
        assert_eq!(doc.personal.as_deref(), Some("s1"));
        assert_eq!(doc.costo, 300_000.0);
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_date() {
        let mut doc = full_create().into_document("m1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdateMantenimiento {
            costo: Some(1.0),
            fecha_fin: Some("2026-13-01".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
