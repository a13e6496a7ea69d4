//! Handlers for `/api/historialpago`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::historial_pago::{CreateHistorialPago, HistorialPago, UpdateHistorialPago};
use condo_db::models::pago::Pago;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/historialpago/
pub async fn create_historial_pago(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateHistorialPago>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let historial = input.into_document(new_doc_id())?;

    ensure_exists::<Pago>(store, &historial.pago).await?;
    DocumentRepo::save(store, &historial).await?;

    tracing::info!(
        id_historial_pago = %historial.id_historial_pago,
        pago = %historial.pago,
        "HistorialPago created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(historial))))
}

/// PUT /api/historialpago/{id}/
pub async fn update_historial_pago(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateHistorialPago>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut historial = find_or_404::<HistorialPago>(store, &id).await?;

    let new_pago = input.pago.clone();
    historial.apply(input)?;

    if let Some(pago) = new_pago.as_deref() {
        ensure_exists::<Pago>(store, pago).await?;
    }
    DocumentRepo::save(store, &historial).await?;

    tracing::info!(id_historial_pago = %id, "HistorialPago updated");

    Ok(Json(DataResponse::success(historial)))
}
