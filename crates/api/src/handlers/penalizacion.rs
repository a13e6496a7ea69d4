//! Handlers for `/api/penalizacion`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::morosidad::Morosidad;
use condo_db::models::penalizacion::{CreatePenalizacion, Penalizacion, UpdatePenalizacion};
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/penalizacion/
pub async fn create_penalizacion(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePenalizacion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let penalizacion = input.into_document(new_doc_id())?;

    ensure_exists::<Morosidad>(store, &penalizacion.morosidad).await?;
    DocumentRepo::save(store, &penalizacion).await?;

    tracing::info!(
        id_penalizacion = %penalizacion.id_penalizacion,
        morosidad = %penalizacion.morosidad,
        "Penalizacion created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(penalizacion))))
}

/// PUT /api/penalizacion/{id}/
pub async fn update_penalizacion(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdatePenalizacion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut penalizacion = find_or_404::<Penalizacion>(store, &id).await?;

    let new_morosidad = input.morosidad.clone();
    penalizacion.apply(input)?;

    if let Some(morosidad) = new_morosidad.as_deref() {
        ensure_exists::<Morosidad>(store, morosidad).await?;
    }
    DocumentRepo::save(store, &penalizacion).await?;

    tracing::info!(id_penalizacion = %id, "Penalizacion updated");

    Ok(Json(DataResponse::success(penalizacion)))
}
