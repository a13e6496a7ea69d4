//! Typed access through [`DocumentRepo`] on top of the in-memory store.

use assert_matches::assert_matches;
use condo_db::models::departamento::{CreateDepartamento, Departamento};
use condo_db::models::residente::Residente;
use condo_db::models::Document;
use condo_db::repositories::DocumentRepo;
use condo_db::store::{DocumentStore, MemoryDocumentStore, StoreError};
use serde_json::json;

fn departamento(id: &str, numero: &str) -> Departamento {
    CreateDepartamento {
        numero: Some(numero.into()),
        piso: Some(2.0),
        tipo: Some("Arriendo".into()),
        superficie: Some(70.0),
        estado: Some("Disponible".into()),
    }
    .into_document(id.into())
    .unwrap()
}

#[tokio::test]
async fn save_then_find_round_trips_the_document() {
    let store = MemoryDocumentStore::new();
    let dep = departamento("d1", "201");

    DocumentRepo::save(&store, &dep).await.unwrap();
    let found: Option<Departamento> = DocumentRepo::find_by_id(&store, "d1").await.unwrap();

    assert_eq!(found, Some(dep));
}

#[tokio::test]
async fn documents_are_stored_under_their_collection() {
    let store = MemoryDocumentStore::new();
    DocumentRepo::save(&store, &departamento("d1", "201"))
        .await
        .unwrap();

    let raw = store.get(Departamento::COLLECTION, "d1").await.unwrap();
    assert_eq!(raw.unwrap()["numero"], "201");
    assert!(!DocumentRepo::exists::<Residente>(&store, "d1").await.unwrap());
}

#[tokio::test]
async fn find_by_field_returns_typed_matches() {
    let store = MemoryDocumentStore::new();
    DocumentRepo::save(&store, &departamento("d1", "201"))
        .await
        .unwrap();
    DocumentRepo::save(&store, &departamento("d2", "202"))
        .await
        .unwrap();

    let found: Vec<Departamento> = DocumentRepo::find_by_field(&store, "numero", "202")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), "d2");
}

#[tokio::test]
async fn delete_removes_the_document() {
    let store = MemoryDocumentStore::new();
    DocumentRepo::save(&store, &departamento("d1", "201"))
        .await
        .unwrap();

    assert!(DocumentRepo::delete::<Departamento>(&store, "d1").await.unwrap());
    assert!(!DocumentRepo::exists::<Departamento>(&store, "d1").await.unwrap());
}

#[tokio::test]
async fn malformed_stored_document_is_a_serialization_error() {
    let store = MemoryDocumentStore::new();
    store
        .save(Departamento::COLLECTION, "bad", &json!({"numero": 5}))
        .await
        .unwrap();

    let result = DocumentRepo::find_by_id::<Departamento>(&store, "bad").await;
    assert_matches!(result, Err(StoreError::Serialization(_)));

    let result = DocumentRepo::list::<Departamento>(&store).await;
    assert_matches!(result, Err(StoreError::Serialization(_)));
}
