//! Handlers for `/api/feedback`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use condo_db::models::residente::Residente;
use condo_db::repositories::DocumentRepo;

use super::{ensure_exists, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/feedback/
pub async fn create_feedback(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let feedback = input.into_document(new_doc_id())?;

    ensure_exists::<Residente>(store, &feedback.residente).await?;
    DocumentRepo::save(store, &feedback).await?;

    tracing::info!(
        id_feedback = %feedback.id_feedback,
        residente = %feedback.residente,
        "Feedback created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(feedback))))
}

/// PUT /api/feedback/{id}/
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateFeedback>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut feedback = find_or_404::<Feedback>(store, &id).await?;

    let new_residente = input.residente.clone();
    feedback.apply(input)?;

    if let Some(residente) = new_residente.as_deref() {
        ensure_exists::<Residente>(store, residente).await?;
    }
    DocumentRepo::save(store, &feedback).await?;

    tracing::info!(id_feedback = %id, "Feedback updated");

    Ok(Json(DataResponse::success(feedback)))
}
