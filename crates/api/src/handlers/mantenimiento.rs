//! Handlers for maintenance jobs (`/api/mantenimiento`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::mantenimiento::{CreateMantenimiento, Mantenimiento, UpdateMantenimiento};
use condo_db::models::personal::Personal;
use condo_db::repositories::DocumentRepo;

use super::{ensure_optional_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/mantenimiento/
///
/// The assigned `personal` is optional but must exist when given.
pub async fn create_mantenimiento(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMantenimiento>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mantenimiento = input.into_document(new_doc_id())?;

    ensure_optional_exists::<Personal>(store, mantenimiento.personal.as_deref()).await?;
    DocumentRepo::save(store, &mantenimiento).await?;

    tracing::info!(
        id_mantenimiento = %mantenimiento.id_mantenimiento,
        estado = %mantenimiento.estado,
        "Mantenimiento created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(mantenimiento))))
}

/// PUT /api/mantenimiento/{id}/
pub async fn update_mantenimiento(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateMantenimiento>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut mantenimiento = find_or_404::<Mantenimiento>(store, &id).await?;

    let new_personal = input.personal.clone();
    mantenimiento.apply(input)?;

    ensure_optional_exists::<Personal>(store, new_personal.as_deref()).await?;
    DocumentRepo::save(store, &mantenimiento).await?;

    tracing::info!(id_mantenimiento = %id, "Mantenimiento updated");

    Ok(Json(DataResponse::success(mantenimiento)))
}
