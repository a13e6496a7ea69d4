//! Handlers for `/api/notificacion`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::notificacion::{CreateNotificacion, Notificacion, UpdateNotificacion};
use condo_db::models::residente::Residente;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/notificacion/
pub async fn create_notificacion(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateNotificacion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let notificacion = input.into_document(new_doc_id())?;

    ensure_exists::<Residente>(store, &notificacion.residente).await?;
    DocumentRepo::save(store, &notificacion).await?;

    tracing::info!(
        id_notificacion = %notificacion.id_notificacion,
        residente = %notificacion.residente,
        "Notificacion created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(notificacion))))
}

/// PUT /api/notificacion/{id}/
pub async fn update_notificacion(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateNotificacion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut notificacion = find_or_404::<Notificacion>(store, &id).await?;

    let new_residente = input.residente.clone();
    notificacion.apply(input)?;

    if let Some(residente) = new_residente.as_deref() {
        ensure_exists::<Residente>(store, residente).await?;
    }
    DocumentRepo::save(store, &notificacion).await?;

    tracing::info!(id_notificacion = %id, "Notificacion updated");

    Ok(Json(DataResponse::success(notificacion)))
}
