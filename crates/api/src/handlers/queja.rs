//! Handlers for `/api/queja`.
//!
//! A complaint lodged by a residente; staff may be assigned to resolve it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::personal::Personal;
use condo_db::models::queja::{CreateQueja, Queja, UpdateQueja};
use condo_db::models::residente::Residente;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, ensure_optional_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/queja/
pub async fn create_queja(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateQueja>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let queja = input.into_document(new_doc_id())?;

    ensure_exists::<Residente>(store, &queja.residente).await?;
    ensure_optional_exists::<Personal>(store, queja.personal.as_deref()).await?;
    DocumentRepo::save(store, &queja).await?;

    tracing::info!(
        id_queja = %queja.id_queja,
        residente = %queja.residente,
        "Queja created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(queja))))
}

/// PUT /api/queja/{id}/
pub async fn update_queja(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateQueja>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut queja = find_or_404::<Queja>(store, &id).await?;

    let new_residente = input.residente.clone();
    let new_personal = input.personal.clone();
    queja.apply(input)?;

    if let Some(residente) = new_residente.as_deref() {
        ensure_exists::<Residente>(store, residente).await?;
    }
    ensure_optional_exists::<Personal>(store, new_personal.as_deref()).await?;
    DocumentRepo::save(store, &queja).await?;

    tracing::info!(id_queja = %id, "Queja updated");

    Ok(Json(DataResponse::success(queja)))
}
