//! Handlers for payments (`/api/pago`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::departamento::Departamento;
use condo_db::models::pago::{CreatePago, Pago, UpdatePago};
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/pago/
///
/// Record a payment against an existing departamento.
pub async fn create_pago(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePago>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let pago = input.into_document(new_doc_id())?;

    ensure_exists::<Departamento>(store, &pago.departamento).await?;
    DocumentRepo::save(store, &pago).await?;

    tracing::info!(id_pago = %pago.id_pago, departamento = %pago.departamento, "Pago created");

    Ok((StatusCode::CREATED, Json(DataResponse::success(pago))))
}

/// PUT /api/pago/{id}/
pub async fn update_pago(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdatePago>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut pago = find_or_404::<Pago>(store, &id).await?;

    let new_departamento = input.departamento.clone();
    pago.apply(input)?;

    if let Some(departamento) = new_departamento.as_deref() {
        ensure_exists::<Departamento>(store, departamento).await?;
    }
    DocumentRepo::save(store, &pago).await?;

    tracing::info!(id_pago = %id, "Pago updated");

    Ok(Json(DataResponse::success(pago)))
}
