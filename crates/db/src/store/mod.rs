//! The document-store seam.
//!
//! The API only ever needs id-keyed access to JSON documents grouped by
//! collection. [`DocumentStore`] captures that surface so the server can run
//! against PostgreSQL in production and an in-memory map in development and
//! tests.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Shared handle to whichever store backend the server was started with.
pub type SharedStore = Arc<dyn DocumentStore>;

/// Errors raised by store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write collided with a unique natural key (constraint name attached).
    #[error("Duplicate value violates unique constraint: {0}")]
    Duplicate(String),

    /// A stored document could not be converted to or from its model.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        // PostgreSQL unique constraint violation: error code 23505
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return StoreError::Duplicate(constraint.to_string());
                }
            }
        }
        StoreError::Database(err)
    }
}

/// Minimal id-keyed JSON document storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Fetch every document in a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Insert or replace a document.
    async fn save(&self, collection: &str, id: &str, document: &Value) -> Result<(), StoreError>;

    /// Remove a document. Returns `true` if one was removed.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Fetch the documents whose top-level string `field` equals `value`.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, StoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
