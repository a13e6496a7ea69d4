//! Shared response envelope types for API handlers.
//!
//! Every response body carries a `status` field: `"success"` with either a
//! `data` payload or a `message`, or `"error"` with a `message` (see
//! [`crate::error::AppError`]).

use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{ "status": "success", "data": T }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::success(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data,
        }
    }
}

/// `{ "status": "success", "message": "..." }` envelope for operations
/// without a payload (deletes).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
        }
    }
}
