//! GastoComun (common expense) models and DTOs.

use condo_core::choices::{GASTO_COMUN_ESTADOS, GASTO_COMUN_TIPOS};
use condo_core::error::CoreError;
use condo_core::types::{DocId, Timestamp};
use condo_core::validation::{
    parse_optional_timestamp, parse_timestamp, required, validate_choice,
    validate_optional_choice,
};
use serde::{Deserialize, Serialize};

use super::Document;

/// A document from the `gastocomun` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GastoComun {
    pub id_gasto: DocId,
    pub tipo: String,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: Timestamp,
    pub estado: String,
}

impl Document for GastoComun {
    const COLLECTION: &'static str = "gastocomun";
    const ENTITY: &'static str = "GastoComun";

    fn id(&self) -> &str {
        &self.id_gasto
    }
}

impl GastoComun {
    pub fn apply(&mut self, update: UpdateGastoComun) -> Result<(), CoreError> {
        validate_optional_choice("tipo", update.tipo.as_deref(), GASTO_COMUN_TIPOS)?;
        validate_optional_choice("estado", update.estado.as_deref(), GASTO_COMUN_ESTADOS)?;
        let fecha = parse_optional_timestamp("fecha", update.fecha.as_deref())?;

        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(descripcion) = update.descripcion {
            self.descripcion = descripcion;
        }
        if let Some(monto) = update.monto {
            self.monto = monto;
        }
        if let Some(fecha) = fecha {
            self.fecha = fecha;
        }
        if let Some(estado) = update.estado {
            self.estado = estado;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGastoComun {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub estado: Option<String>,
}

impl CreateGastoComun {
    pub fn into_document(self, id: DocId) -> Result<GastoComun, CoreError> {
        let tipo = required(self.tipo, "tipo")?;
        let descripcion = required(self.descripcion, "descripcion")?;
        let monto = required(self.monto, "monto")?;
        let fecha = required(self.fecha, "fecha")?;
        let estado = required(self.estado, "estado")?;

        validate_choice("tipo", &tipo, GASTO_COMUN_TIPOS)?;
        validate_choice("estado", &estado, GASTO_COMUN_ESTADOS)?;
        let fecha = parse_timestamp("fecha", &fecha)?;

        Ok(GastoComun {
            id_gasto: id,
            tipo,
            descripcion,
            monto,
            fecha,
            estado,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGastoComun {
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_create() -> CreateGastoComun {
        CreateGastoComun {
            tipo: Some("Agua".into()),
            descripcion: Some("Consumo octubre".into()),
            monto: Some(120_000.0),
            fecha: Some("2026-10-15".into()),
            estado: Some("Pendiente".into()),
        }
    }

    #[test]
    fn into_document_reports_first_missing_field() {
        let input = CreateGastoComun {
            descripcion: None,
            fecha: None,
            ..full_create()
        };
        let err = input.into_document("g1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'descripcion'"));
    }

    #[test]
    fn into_document_rejects_unknown_tipo() {
        let input = CreateGastoComun {
            tipo: Some("Calefaccion".into()),
            ..full_create()
        };
        let err = input.into_document("g1".into()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("tipo"));
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut doc = full_create().into_document("g1".into()).unwrap();
        doc.apply(UpdateGastoComun {
            estado: Some("Pagado".into()),
            monto: Some(118_500.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(doc.estado, "Pagado");
        assert_eq!(doc.monto, 118_500.0);
        assert_eq!(doc.tipo, "Agua");
    }

    #[test]
    fn apply_leaves_document_untouched_on_invalid_value() {
        let mut doc = full_create().into_document("g1".into()).unwrap();
        let before = doc.clone();
        let result = doc.apply(UpdateGastoComun {
            descripcion: Some("Corregido".into()),
            estado: Some("Anulado".into()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
