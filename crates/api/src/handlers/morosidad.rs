//! Handlers for `/api/morosidad`.
//!
//! A morosidad records an overdue pago; penalizaciones hang off it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::morosidad::{CreateMorosidad, Morosidad, UpdateMorosidad};
use condo_db::models::pago::Pago;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/morosidad/
pub async fn create_morosidad(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMorosidad>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let morosidad = input.into_document(new_doc_id())?;

    ensure_exists::<Pago>(store, &morosidad.pago).await?;
    DocumentRepo::save(store, &morosidad).await?;

    tracing::info!(
        id_morosidad = %morosidad.id_morosidad,
        pago = %morosidad.pago,
        "Morosidad created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(morosidad))))
}

/// PUT /api/morosidad/{id}/
pub async fn update_morosidad(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateMorosidad>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut morosidad = find_or_404::<Morosidad>(store, &id).await?;

    let new_pago = input.pago.clone();
    morosidad.apply(input)?;

    if let Some(pago) = new_pago.as_deref() {
        ensure_exists::<Pago>(store, pago).await?;
    }
    DocumentRepo::save(store, &morosidad).await?;

    tracing::info!(id_morosidad = %id, "Morosidad updated");

    Ok(Json(DataResponse::success(morosidad)))
}
