//! Handlers for residentes (`/api/residente`).
//!
//! A residente belongs to an existing departamento and is identified by a
//! unique RUT.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::departamento::Departamento;
use condo_db::models::residente::{CreateResidente, Residente, UpdateResidente};
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, ensure_unique, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/residente/
///
/// Returns 404 if the referenced departamento does not exist and 409 if
/// another residente already holds the RUT.
pub async fn create_residente(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateResidente>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let residente = input.into_document(new_doc_id())?;

    ensure_exists::<Departamento>(store, &residente.departamento).await?;
    ensure_unique::<Residente>(store, "rut", &residente.rut, None).await?;
    DocumentRepo::save(store, &residente).await?;

    tracing::info!(
        id_residente = %residente.id_residente,
        departamento = %residente.departamento,
        "Residente created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(residente))))
}

/// PUT /api/residente/{id}/
pub async fn update_residente(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateResidente>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut residente = find_or_404::<Residente>(store, &id).await?;

    let new_departamento = input.departamento.clone();
    let rut_changed = input.rut.is_some();
    residente.apply(input)?;

    if let Some(departamento) = new_departamento.as_deref() {
        ensure_exists::<Departamento>(store, departamento).await?;
    }
    if rut_changed {
        ensure_unique::<Residente>(store, "rut", &residente.rut, Some(&id)).await?;
    }
    DocumentRepo::save(store, &residente).await?;

    tracing::info!(id_residente = %id, "Residente updated");

    Ok(Json(DataResponse::success(residente)))
}
