//! Penalizacion models and DTOs.
//!
//! A penalty applied on top of a morosidad.

use condo_core::choices::PENALIZACION_ESTADOS;
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `penalizacion` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalizacion {
    pub id_penalizacion: DocId,
    /// References `morosidad`.
    pub morosidad: DocId,
    pub monto: f64,
    pub descripcion: String,
    pub fecha_aplicacion: Timestamp,
    pub estado: String,
}

impl Document for Penalizacion {
    const COLLECTION: &'static str = "penalizacion";
    const ENTITY: &'static str = "Penalizacion";

    fn id(&self) -> &str {
        &self.id_penalizacion
    }
}

impl Penalizacion {
    pub fn apply(&mut self, update: UpdatePenalizacion) -> Result<(), CoreError> {
        validate_optional_choice("estado", update.estado.as_deref(), PENALIZACION_ESTADOS)?;
        let fecha_aplicacion =
            parse_optional_timestamp("fecha_aplicacion", update.fecha_aplicacion.as_deref())?;

        if let Some(morosidad) = update.morosidad {
            self.morosidad = morosidad;
        }
        if let Some(monto) = update.monto {
            self.monto = monto;
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(fecha) = fecha_aplicacion {
            self.fecha_aplicacion = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePenalizacion {
    pub morosidad: Option<DocId>,
    pub monto: Option<f64>,
    pub descripcion: Option<String>,
    pub fecha_aplicacion: Option<String>,
    pub estado: Option<String>,
}

impl CreatePenalizacion {
    pub fn into_document(self, id: DocId) -> Result<Penalizacion, CoreError> {
        let morosidad = required(self.morosidad, "morosidad")?;
        let monto = required(self.monto, "monto")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let fecha_aplicacion = required(self.fecha_aplicacion, "fecha_aplicacion")?;
        let estado = required(self.estado, "estado")?;

        let fecha_aplicacion = parse_timestamp("fecha_aplicacion", &fecha_aplicacion)?;
        validate_choice("estado", &estado, PENALIZACION_ESTADOS)?;

        Ok(Penalizacion {
            id_penalizacion: id,
            morosidad,
            monto,
            descripcion,
            fecha_aplicacion,
            estado,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePenalizacion {
    pub morosidad: Option<DocId>,
    pub monto: Option<f64>,
    pub descripcion: Option<String>,
    pub fecha_aplicacion: Option<String>,
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreatePenalizacion {
        CreatePenalizacion {
            morosidad: Some("mo1".into()),
            monto: Some(15_000.0),
            descripcion: Some("Recargo por atraso".into()),
            fecha_aplicacion: Some("2026-10-10".into()),
            estado: Some("Aplicada".into()),
        }
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreatePenalizacion {
            morosidad: None,
            ..full_create()
        };
        let err = input.into_document("pe1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'morosidad'"));
    }

    #[test]
    fn into_document_rejects_unknown_estado() {
        let input = CreatePenalizacion {
            estado: Some("Anulada".into()),
            ..full_create()
        };
        assert!(input.into_document("pe1".into()).is_err());
    }

    #[test]
    fn apply_reverts_and_keeps_other_fields() {
        let mut doc = full_create().into_document("pe1".into()).unwrap();
        doc.apply(UpdatePenalizacion {
            estado: Some("Revertida".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(doc.estado, "Revertida");
        assert_eq!(doc.monto, 15_000.0);
        assert_eq!(doc.morosidad, "mo1");
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_value() {
        let mut doc = full_create().into_document("pe1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdatePenalizacion {
            monto: Some(0.0),
            fecha_aplicacion: Some("10/10/2026".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
