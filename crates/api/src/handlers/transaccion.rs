//! Handlers for ledger transacciones (`/api/transaccion`).
//!
//! A transaccion may be tied to a departamento or be building-wide.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::departamento::Departamento;
use condo_db::models::transaccion::{CreateTransaccion, Transaccion, UpdateTransaccion};
use condo_db::repositories::DocumentRepo;

use super::{ensure_optional_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/transaccion/
pub async fn create_transaccion(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTransaccion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let transaccion = input.into_document(new_doc_id())?;

    ensure_optional_exists::<Departamento>(store, transaccion.departamento.as_deref()).await?;
    DocumentRepo::save(store, &transaccion).await?;

    tracing::info!(
        id_transaccion = %transaccion.id_transaccion,
        tipo = %transaccion.tipo,
        monto = transaccion.monto,
        "Transaccion created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(transaccion))))
}

/// PUT /api/transaccion/{id}/
pub async fn update_transaccion(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateTransaccion>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut transaccion = find_or_404::<Transaccion>(store, &id).await?;

    let new_departamento = input.departamento.clone();
    transaccion.apply(input)?;

    ensure_optional_exists::<Departamento>(store, new_departamento.as_deref()).await?;
    DocumentRepo::save(store, &transaccion).await?;

    tracing::info!(id_transaccion = %id, "Transaccion updated");

    Ok(Json(DataResponse::success(transaccion)))
}
