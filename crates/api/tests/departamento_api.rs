//! HTTP-level tests for the departamento endpoints, covering the behaviour
//! shared by every collection (envelope, trailing slashes, partial update,
//! delete) plus `numero` uniqueness.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, departamento_body, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_returns_201_with_generated_id() {
    let store = common::memory_store();
    let response = post_json(
        common::build_test_app(store),
        "/api/departamento/",
        departamento_body("101"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["numero"], "101");
    assert_eq!(json["data"]["piso"], 3.0);
    assert!(json["data"]["id_departamento"].is_string());
}

#[tokio::test]
async fn create_reports_first_missing_field() {
    let store = common::memory_store();
    let response = post_json(
        common::build_test_app(store),
        "/api/departamento/",
        json!({"numero": "101", "tipo": "Propietario"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Field 'piso' is required");
}

#[tokio::test]
async fn create_rejects_unknown_estado() {
    let store = common::memory_store();
    let mut body = departamento_body("101");
    body["estado"] = json!("Demolido");

    let response = post_json(common::build_test_app(store), "/api/departamento/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("estado"));
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/departamento/")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"numero\": "))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn piso_accepts_any_json_number() {
    let store = common::memory_store();
    let mut body = departamento_body("101");
    body["piso"] = json!(2.0);

    let response = post_json(common::build_test_app(store), "/api/departamento/", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["piso"], 2.0);
}

#[tokio::test]
async fn wrongly_typed_field_returns_400() {
    let store = common::memory_store();
    let mut body = departamento_body("101");
    body["piso"] = json!("tercero");

    let response = post_json(common::build_test_app(store), "/api/departamento/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_numero_returns_409() {
    let store = common::memory_store();
    common::seed_departamento(&store, "101").await;

    let response = post_json(
        common::build_test_app(store),
        "/api/departamento/",
        departamento_body("101"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn list_returns_documents_in_creation_order() {
    let store = common::memory_store();
    common::seed_departamento(&store, "101").await;
    common::seed_departamento(&store, "102").await;

    let response = get(common::build_test_app(store), "/api/departamento/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let numeros: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["numero"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(numeros, ["101", "102"]);
}

#[tokio::test]
async fn paths_work_with_and_without_trailing_slash() {
    let store = common::memory_store();
    let id = common::seed_departamento(&store, "101").await;

    for uri in [
        "/api/departamento".to_string(),
        "/api/departamento/".to_string(),
        format!("/api/departamento/{id}"),
        format!("/api/departamento/{id}/"),
    ] {
        let response = get(common::build_test_app(store.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn get_nonexistent_returns_404() {
    let store = common::memory_store();
    let response = get(common::build_test_app(store), "/api/departamento/missing/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Departamento with id missing not found");
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let store = common::memory_store();
    let id = common::seed_departamento(&store, "101").await;

    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/departamento/{id}/"),
        json!({"estado": "Disponible", "color": "ignored"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["estado"], "Disponible");
    assert_eq!(json["data"]["numero"], "101");
    assert_eq!(json["data"]["id_departamento"], id.as_str());
    assert!(json["data"].get("color").is_none());

    let response = get(
        common::build_test_app(store),
        &format!("/api/departamento/{id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["estado"], "Disponible");
}

#[tokio::test]
async fn update_nonexistent_returns_404() {
    let store = common::memory_store();
    let response = put_json(
        common::build_test_app(store),
        "/api/departamento/missing",
        json!({"estado": "Disponible"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_to_taken_numero_returns_409() {
    let store = common::memory_store();
    common::seed_departamento(&store, "101").await;
    let id = common::seed_departamento(&store, "102").await;

    let response = put_json(
        common::build_test_app(store),
        &format!("/api/departamento/{id}"),
        json!({"numero": "101"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_keeping_own_numero_is_allowed() {
    let store = common::memory_store();
    let id = common::seed_departamento(&store, "101").await;

    let response = put_json(
        common::build_test_app(store),
        &format!("/api/departamento/{id}"),
        json!({"numero": "101", "piso": 4}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["piso"], 4.0);
}

#[tokio::test]
async fn invalid_update_leaves_document_untouched() {
    let store = common::memory_store();
    let id = common::seed_departamento(&store, "101").await;

    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/departamento/{id}"),
        json!({"piso": 9, "tipo": "Comodato"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(common::build_test_app(store), &format!("/api/departamento/{id}")).await).await;
    assert_eq!(json["data"]["piso"], 3.0);
}

#[tokio::test]
async fn delete_removes_document() {
    let store = common::memory_store();
    let id = common::seed_departamento(&store, "101").await;

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/departamento/{id}/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert!(json["message"].as_str().unwrap().contains(&id));

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/departamento/{id}/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        common::build_test_app(store),
        &format!("/api/departamento/{id}/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
