//! Handlers for `/api/cuota`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::cuota::{CreateCuota, Cuota, UpdateCuota};
use condo_db::models::departamento::Departamento;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/cuota/
pub async fn create_cuota(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCuota>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let cuota = input.into_document(new_doc_id())?;

    ensure_exists::<Departamento>(store, &cuota.departamento).await?;
    DocumentRepo::save(store, &cuota).await?;

    tracing::info!(id_cuota = %cuota.id_cuota, departamento = %cuota.departamento, "Cuota created");

    Ok((StatusCode::CREATED, Json(DataResponse::success(cuota))))
}

/// PUT /api/cuota/{id}/
pub async fn update_cuota(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateCuota>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut cuota = find_or_404::<Cuota>(store, &id).await?;

    let new_departamento = input.departamento.clone();
    cuota.apply(input)?;

    if let Some(departamento) = new_departamento.as_deref() {
        ensure_exists::<Departamento>(store, departamento).await?;
    }
    DocumentRepo::save(store, &cuota).await?;

    tracing::info!(id_cuota = %id, "Cuota updated");

    Ok(Json(DataResponse::success(cuota)))
}
