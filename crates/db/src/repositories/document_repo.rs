//! Generic repository converting between typed [`Document`]s and the JSON
//! values held by a [`DocumentStore`].

use crate::models::Document;
use crate::store::{DocumentStore, StoreError};

/// Provides typed CRUD access for any [`Document`] type.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Find a document by its ID.
    pub async fn find_by_id<T: Document>(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        store
            .get(T::COLLECTION, id)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }

    /// List every document of type `T`, ordered by ID.
    pub async fn list<T: Document>(store: &dyn DocumentStore) -> Result<Vec<T>, StoreError> {
        store
            .list(T::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    /// Whether a document with this ID exists.
    pub async fn exists<T: Document>(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<bool, StoreError> {
        Ok(store.get(T::COLLECTION, id).await?.is_some())
    }

    /// Insert or replace a document under its own ID.
    pub async fn save<T: Document>(store: &dyn DocumentStore, doc: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(doc)?;
        store.save(T::COLLECTION, doc.id(), &value).await
    }

    /// Delete a document by ID.
    ///
    /// Returns `true` if a document was deleted.
    pub async fn delete<T: Document>(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<bool, StoreError> {
        store.delete(T::COLLECTION, id).await
    }

    /// Find documents whose string `field` equals `value`.
    pub async fn find_by_field<T: Document>(
        store: &dyn DocumentStore,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>, StoreError> {
        store
            .find_by_field(T::COLLECTION, field, value)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }
}
