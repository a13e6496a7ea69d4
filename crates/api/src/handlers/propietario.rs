//! Handlers for propietarios (`/api/propietario`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::propietario::{CreatePropietario, Propietario, UpdatePropietario};
use condo_db::repositories::DocumentRepo;

use super::{ensure_unique, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/propietario/
pub async fn create_propietario(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePropietario>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let propietario = input.into_document(new_doc_id())?;

    ensure_unique::<Propietario>(store, "rut", &propietario.rut, None).await?;
    DocumentRepo::save(store, &propietario).await?;

    tracing::info!(id_propietario = %propietario.id_propietario, "Propietario created");

    Ok((StatusCode::CREATED, Json(DataResponse::success(propietario))))
}

/// PUT /api/propietario/{id}/
pub async fn update_propietario(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdatePropietario>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut propietario = find_or_404::<Propietario>(store, &id).await?;

    let rut_changed = input.rut.is_some();
    propietario.apply(input)?;

    if rut_changed {
        ensure_unique::<Propietario>(store, "rut", &propietario.rut, Some(&id)).await?;
    }
    DocumentRepo::save(store, &propietario).await?;

    tracing::info!(id_propietario = %id, "Propietario updated");

    Ok(Json(DataResponse::success(propietario)))
}
