#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use condo_api::config::ServerConfig;
use condo_api::router::build_app_router;
use condo_api::state::AppState;
use condo_db::store::{MemoryDocumentStore, SharedStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
        log_json: false,
    }
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> SharedStore {
    Arc::new(MemoryDocumentStore::new())
}

/// Build the full application router over `store` with the production
/// middleware stack.
pub fn build_test_app(store: SharedStore) -> Router {
    build_app_router(AppState { store }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// POST `body` to `uri`, assert 201 and return the created document.
pub async fn create(store: &SharedStore, uri: &str, body: Value) -> Value {
    let response = post_json(build_test_app(store.clone()), uri, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, 201, "create at {uri} failed: {json}");
    json["data"].clone()
}

// ---------------------------------------------------------------------------
// Payload fixtures
// ---------------------------------------------------------------------------

pub fn departamento_body(numero: &str) -> Value {
    json!({
        "numero": numero,
        "piso": 3,
        "tipo": "Propietario",
        "superficie": 72.5,
        "estado": "Ocupado"
    })
}

pub fn residente_body(departamento: &str, rut: &str) -> Value {
    json!({
        "departamento": departamento,
        "nombre": "Ana",
        "apepat": "Rojas",
        "apemat": "Soto",
        "rut": rut,
        "telefono": "+56911112222",
        "email": "ana.rojas@example.com"
    })
}

pub fn personal_body(email: &str) -> Value {
    json!({
        "nombre": "Luis",
        "apepat": "Muñoz",
        "apemat": "Vera",
        "cargo": "Conserje",
        "telefono": "+56933334444",
        "email": email,
        "fecha_contratacion": "2023-01-15"
    })
}

pub fn pago_body(departamento: &str) -> Value {
    json!({
        "departamento": departamento,
        "monto": 85000.0,
        "fecha_pago": "2024-03-05T10:00:00Z",
        "periodo": "2024-03",
        "estado": "Pagado"
    })
}

/// Create a departamento and return its id.
pub async fn seed_departamento(store: &SharedStore, numero: &str) -> String {
    let doc = create(store, "/api/departamento/", departamento_body(numero)).await;
    doc["id_departamento"].as_str().unwrap().to_string()
}

/// Create a residente in a fresh departamento and return its id.
pub async fn seed_residente(store: &SharedStore, rut: &str) -> String {
    let departamento = seed_departamento(store, &format!("D-{rut}")).await;
    let doc = create(store, "/api/residente/", residente_body(&departamento, rut)).await;
    doc["id_residente"].as_str().unwrap().to_string()
}

/// Create a pago for a fresh departamento and return its id.
pub async fn seed_pago(store: &SharedStore, numero: &str) -> String {
    let departamento = seed_departamento(store, numero).await;
    let doc = create(store, "/api/pago/", pago_body(&departamento)).await;
    doc["id_pago"].as_str().unwrap().to_string()
}
