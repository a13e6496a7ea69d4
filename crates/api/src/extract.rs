//! Request extractors with API-shaped rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection (malformed body, wrong content type, type
/// mismatch) is reported through [`AppError`] as a 400 error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
