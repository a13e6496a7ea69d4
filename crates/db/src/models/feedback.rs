//! Feedback models and DTOs.

use condo_core::choices::{FEEDBACK_ESTADOS, FEEDBACK_TIPOS};
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `feedback` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id_feedback: DocId,
    /// References `residente`.
    pub residente: DocId,
    pub tipo: String,
    pub comentarios: String,
    pub fecha_creacion: Timestamp,
    pub estado: String,
}

impl Document for Feedback {
    const COLLECTION: &'static str = "feedback";
    const ENTITY: &'static str = "Feedback";

    fn id(&self) -> &str {
        &self.id_feedback
    }
}

impl Feedback {
    pub fn apply(&mut self, update: UpdateFeedback) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), FEEDBACK_TIPOS)?;
        validate_optional_choice("estado", update.estado.as_deref(), FEEDBACK_ESTADOS)?;
        let fecha_creacion =
            parse_optional_timestamp("fecha_creacion", update.fecha_creacion.as_deref())?;

        if let Some(residente) = update.residente {
            self.residente = residente;
        }
        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(comentarios) = update.comentarios {
            self.comentarios = comentarios;
        }
        if let Some(fecha) = fecha_creacion {
            self.fecha_creacion = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFeedback {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub comentarios: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
}

impl CreateFeedback {
    pub fn into_document(self, id: DocId) -> Result<Feedback, CoreError> {
        let residente = required(self.residente, "residente")?;
        let tipo = required(self.tipo, "tipo")?;
        let comentarios = required(self.comentarios, "comentarios")?;
        let fecha_creacion = required(self.fecha_creacion, "fecha_creacion")?;
        let estado = required(self.estado, "estado")?;

        validate_choice("tipo", &tipo, FEEDBACK_TIPOS)?;
        let fecha_creacion = parse_timestamp("fecha_creacion", &fecha_creacion)?;
        validate_choice("estado", &estado, FEEDBACK_ESTADOS)?;

        Ok(Feedback {
            id_feedback: id,
            residente,
            tipo,
            comentarios,
            fecha_creacion,
            estado,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFeedback {
    pub residente: Option<DocId>,
    pub tipo: Option<String>,
    pub comentarios: Option<String>,
    pub fecha_creacion: Option<String>,
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreateFeedback {
        CreateFeedback {
            residente: Some("r1".into()),
            tipo: Some("Sugerencia".into()),
            comentarios: Some("Mas iluminacion en el estacionamiento".into()),
            fecha_creacion: Some("2026-10-18".into()),
            estado: Some("Nuevo".into()),
        }
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreateFeedback {
            comentarios: None,
            estado: None,
            ..full_create()
        };
        let err = input.into_document("f1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'comentarios'"));
    }

    #[test]
    fn into_document_rejects_unknown_tipo() {
        let input = CreateFeedback {
            tipo: Some("Neutro".into()),
            ..full_create()
        };
        assert!(input.into_document("f1".into()).is_err());
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut doc = full_create().into_document("f1".into()).unwrap();
        doc.apply(UpdateFeedback {
            estado: Some("Atendido".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(doc.estado, "Atendido");
        assert_eq!(doc.tipo, "Sugerencia");
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_value() {
        let mut doc = full_create().into_document("f1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdateFeedback {
            comentarios: Some("Editado".into()),
            estado: Some("Cerrado".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
