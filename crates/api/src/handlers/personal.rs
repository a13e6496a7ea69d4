//! Handlers for building staff (`/api/personal`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::personal::{CreatePersonal, Personal, UpdatePersonal};
use condo_db::repositories::DocumentRepo;

use super::{ensure_unique, find_or_404};
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/personal/
///
/// Staff emails are unique; a second member with the same email is 409.
pub async fn create_personal(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePersonal>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let personal = input.into_document(new_doc_id())?;

    ensure_unique::<Personal>(store, "email", &personal.email, None).await?;
    DocumentRepo::save(store, &personal).await?;

    tracing::info!(
        id_personal = %personal.id_personal,
        cargo = %personal.cargo,
        "Personal created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::success(personal))))
}

/// PUT /api/personal/{id}/
pub async fn update_personal(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdatePersonal>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut personal = find_or_404::<Personal>(store, &id).await?;

    let email_changed = input.email.is_some();
    personal.apply(input)?;

    if email_changed {
        ensure_unique::<Personal>(store, "email", &personal.email, Some(&id)).await?;
    }
    DocumentRepo::save(store, &personal).await?;

    tracing::info!(id_personal = %id, "Personal updated");

    Ok(Json(DataResponse::success(personal)))
}
