//! Handlers for `/api/solicitud`.
//!
//! Raised by a residente and optionally assigned to a member of staff.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::personal::Personal;
use condo_db::models::solicitud::{CreateSolicitud, Solicitud, UpdateSolicitud};
use condo_db::models::residente::Residente;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, ensure_optional_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/solicitud/
pub async fn create_solicitud(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSolicitud>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let solicitud = input.into_document(new_doc_id())?;

    ensure_exists::<Residente>(store, &solicitud.residente).await?;
    ensure_optional_exists::<Personal>(store, solicitud.personal.as_deref()).await?;
    DocumentRepo::save(store, &solicitud).await?;

    tracing::info!(
        id_solicitud = %solicitud.id_solicitud,
        residente = %solicitud.residente,
        "Solicitud created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(solicitud))))
}

/// PUT /api/solicitud/{id}/
pub async fn update_solicitud(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateSolicitud>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut solicitud = find_or_404::<Solicitud>(store, &id).await?;

    let new_residente = input.residente.clone();
    let new_personal = input.personal.clone();
    solicitud.apply(input)?;

    if let Some(residente) = new_residente.as_deref() {
        ensure_exists::<Residente>(store, residente).await?;
    }
    ensure_optional_exists::<Personal>(store, new_personal.as_deref()).await?;
    DocumentRepo::save(store, &solicitud).await?;

    tracing::info!(id_solicitud = %id, "Solicitud updated");

    Ok(Json(DataResponse::success(solicitud)))
}
