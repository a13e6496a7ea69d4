//! Handlers for departamentos (`/api/departamento`).
//!
//! `numero` is the natural key of a departamento and must be unique.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::departamento::{CreateDepartamento, Departamento, UpdateDepartamento};
use condo_db::repositories::DocumentRepo;

use super::{ensure_unique, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/departamento/
///
/// Create a departamento. Returns 409 if the `numero` is already taken.
pub async fn create_departamento(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDepartamento>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let departamento = input.into_document(new_doc_id())?;

    ensure_unique::<Departamento>(store, "numero", &departamento.numero, None).await?;
    DocumentRepo::save(store, &departamento).await?;

    tracing::info!(
        id_departamento = %departamento.id_departamento,
        numero = %departamento.numero,
        "Departamento created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(departamento))))
}

/// PUT /api/departamento/{id}/
///
/// Merge the provided fields into an existing departamento.
pub async fn update_departamento(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateDepartamento>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut departamento = find_or_404::<Departamento>(store, &id).await?;

    let numero_changed = input.numero.is_some();
    departamento.apply(input)?;

    if numero_changed {
        ensure_unique::<Departamento>(store, "numero", &departamento.numero, Some(&id)).await?;
    }
    DocumentRepo::save(store, &departamento).await?;

    tracing::info!(id_departamento = %id, "Departamento updated");

    Ok(Json(DataResponse::success(departamento)))
}
