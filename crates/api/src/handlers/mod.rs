//! HTTP handlers.
//!
//! Listing, reading and deleting look the same for every document type and
//! are provided here as generic handlers. Create and update carry
//! per-entity reference and uniqueness checks and live in one module per
//! entity.

pub mod cuota;
pub mod departamento;
pub mod feedback;
pub mod gasto_comun;
pub mod historial_pago;
pub mod mantenimiento;
pub mod morosidad;
pub mod notificacion;
pub mod pago;
pub mod penalizacion;
pub mod personal;
pub mod propietario;
pub mod queja;
pub mod residente;
pub mod solicitud;
pub mod transaccion;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use condo_core::error::CoreError;
use condo_core::types::DocId;
use condo_db::models::Document;
use condo_db::repositories::DocumentRepo;
use condo_db::store::DocumentStore;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a document, returning 404 if it does not exist.
pub(crate) async fn find_or_404<T: Document>(store: &dyn DocumentStore, id: &str) -> AppResult<T> {
    DocumentRepo::find_by_id::<T>(store, id)
        .await?
        .ok_or_else(|| not_found::<T>(id))
}

/// Verify that a referenced document exists.
pub(crate) async fn ensure_exists<T: Document>(store: &dyn DocumentStore, id: &str) -> AppResult<()> {
    if DocumentRepo::exists::<T>(store, id).await? {
        Ok(())
    } else {
        Err(not_found::<T>(id))
    }
}

/// Verify an optional reference, skipping the lookup when it is absent.
pub(crate) async fn ensure_optional_exists<T: Document>(
    store: &dyn DocumentStore,
    id: Option<&str>,
) -> AppResult<()> {
    match id {
        Some(id) => ensure_exists::<T>(store, id).await,
        None => Ok(()),
    }
}

/// Reject a natural-key value already held by another document.
///
/// `current_id` is the document being updated, which may keep its own value.
pub(crate) async fn ensure_unique<T: Document>(
    store: &dyn DocumentStore,
    field: &str,
    value: &str,
    current_id: Option<&str>,
) -> AppResult<()> {
    let holders = DocumentRepo::find_by_field::<T>(store, field, value).await?;
    if holders.iter().any(|doc| Some(doc.id()) != current_id) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} with {field} '{value}' already exists",
            T::ENTITY
        ))));
    }
    Ok(())
}

fn not_found<T: Document>(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::ENTITY,
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Generic handlers
// ---------------------------------------------------------------------------

/// GET /api/{collection}/
///
/// List every document in the collection.
pub async fn list_documents<T: Document + 'static>(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = DocumentRepo::list::<T>(state.store.as_ref()).await?;
    tracing::debug!(collection = T::COLLECTION, count = items.len(), "Listed documents");
    Ok(Json(DataResponse::success(items)))
}

/// GET /api/{collection}/{id}/
pub async fn get_document<T: Document + 'static>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let item = find_or_404::<T>(state.store.as_ref(), &id).await?;
    Ok(Json(DataResponse::success(item)))
}

/// DELETE /api/{collection}/{id}/
///
/// Remove a document. References held by other documents are left as-is.
pub async fn delete_document<T: Document + 'static>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DocumentRepo::delete::<T>(state.store.as_ref(), &id).await?;
    if !deleted {
        return Err(not_found::<T>(&id));
    }

    tracing::info!(entity = T::ENTITY, id = %id, "Document deleted");

    Ok(Json(MessageResponse::success(format!(
        "{} {id} deleted",
        T::ENTITY
    ))))
}
