//! Handlers for `/api/gastocomun`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use condo_core::types::{new_doc_id, DocId};
use condo_db::models::gasto_comun::{CreateGastoComun, GastoComun, UpdateGastoComun};
use condo_db::repositories::DocumentRepo;

use super::find_or_404;
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

pub async fn create_gasto_comun(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGastoComun>,
) -> AppResult<impl IntoResponse> {
    let gasto = input.into_document(new_doc_id())?;
    DocumentRepo::save(state.store.as_ref(), &gasto).await?;

    tracing::info!(id_gasto = %gasto.id_gasto, "GastoComun created");

    Ok((StatusCode::CREATED, Json(DataResponse::success(gasto))))
}

pub async fn update_gasto_comun(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ApiJson(input): ApiJson<UpdateGastoComun>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let mut gasto = find_or_404::<GastoComun>(store, &id).await?;

    gasto.apply(input)?;
    DocumentRepo::save(store, &gasto).await?;

    tracing::info!(id_gasto = %id, "GastoComun updated");

    Ok(Json(DataResponse::success(gasto)))
}
