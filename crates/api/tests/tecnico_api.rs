//! HTTP-level tests for the `/tecnicos` resource.
//!
//! Uses `tower::ServiceExt` to send requests straight to the router over an
//! in-memory store, so no database or TCP listener is needed.

mod common;

use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, LOCATION};
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, build_memory_app, delete, get, gustavo, post_json, put_json};

async fn create_gustavo(app: axum::Router) -> i64 {
    let response = post_json(app, "/tecnicos", gustavo()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// POST /tecnicos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_returns_201_with_generated_id_and_location() {
    let (app, _) = build_memory_app();
    let response = post_json(app, "/tecnicos", gustavo()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();

    let json = body_json(response).await;
    let id = json["id"].as_i64().expect("id should be generated");
    assert_eq!(json["nome"], "Gustavo");
    assert_eq!(json["telefone"], "67999999999");
    assert_eq!(json["email"], "aaa@gmail.com");
    assert!(json.get("senha").is_none(), "password must never be echoed");
    assert_eq!(location, format!("/tecnicos/{id}"));
}

#[tokio::test]
async fn insert_ignores_client_supplied_id() {
    let (app, _) = build_memory_app();
    let mut body = gustavo();
    body["id"] = serde_json::json!(77);

    let response = post_json(app, "/tecnicos", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 1);
}

#[tokio::test]
async fn insert_malformed_body_returns_400_envelope() {
    let (app, _) = build_memory_app();
    let response = common::send_json(app, Method::POST, "/tecnicos", "{\"nome\": ".into()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Bad request");
    assert_eq!(json["path"], "/tecnicos");
}

#[tokio::test]
async fn insert_wrong_field_type_returns_400() {
    let (app, _) = build_memory_app();
    let response = post_json(app, "/tecnicos", serde_json::json!({"nome": 42})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn insert_empty_nome_returns_400_validation_error() {
    let (app, _) = build_memory_app();
    let mut body = gustavo();
    body["nome"] = serde_json::json!("");

    let response = post_json(app, "/tecnicos", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation error");
    assert_eq!(json["message"], "nome must not be empty");
}

#[tokio::test]
async fn insert_without_senha_returns_400() {
    let (app, _) = build_memory_app();
    let response = post_json(
        app,
        "/tecnicos",
        serde_json::json!({"nome": "Gustavo", "telefone": "67999999999", "email": "aaa@gmail.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /tecnicos/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_id_returns_created_technician() {
    let (app, _) = build_memory_app();
    let id = create_gustavo(app.clone()).await;

    let response = get(app, &format!("/tecnicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["nome"], "Gustavo");
    assert!(json.get("senha").is_none());
}

#[tokio::test]
async fn find_by_missing_id_returns_404_envelope() {
    let (app, _) = build_memory_app();
    let response = get(app, "/tecnicos/100").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Resource not found");
    assert_eq!(json["path"], "/tecnicos/100");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Entity not found"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let (app, _) = build_memory_app();
    let response = get(app, "/tecnicos/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["path"], "/tecnicos/abc");
}

// ---------------------------------------------------------------------------
// PUT /tecnicos/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_returns_200_with_new_fields_and_same_id() {
    let (app, _) = build_memory_app();
    let id = create_gustavo(app.clone()).await;

    let response = put_json(
        app.clone(),
        &format!("/tecnicos/{id}"),
        serde_json::json!({
            "id": 999,
            "nome": "Gustavo Lima",
            "telefone": "67888888888",
            "email": "gl@gmail.com"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["nome"], "Gustavo Lima");
    assert_eq!(json["telefone"], "67888888888");
    assert_eq!(json["email"], "gl@gmail.com");

    let stored = body_json(get(app, &format!("/tecnicos/{id}")).await).await;
    assert_eq!(stored["nome"], "Gustavo Lima");
}

#[tokio::test]
async fn update_missing_id_returns_404() {
    let (app, _) = build_memory_app();
    let response = put_json(app, "/tecnicos/100", gustavo()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["path"], "/tecnicos/100");
}

// ---------------------------------------------------------------------------
// DELETE /tecnicos/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_existing_returns_204_then_404() {
    let (app, _) = build_memory_app();
    let id = create_gustavo(app.clone()).await;

    let response = delete(app.clone(), &format!("/tecnicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(app, &format!("/tecnicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_never_inserted_id_returns_404() {
    let (app, _) = build_memory_app();
    let response = delete(app, "/tecnicos/10").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Resource not found");
    assert_eq!(json["path"], "/tecnicos/10");
}

#[tokio::test]
async fn delete_referenced_returns_400_database_exception() {
    let (app, repo) = build_memory_app();
    let id = create_gustavo(app.clone()).await;
    repo.add_reference(id).await.unwrap();

    let response = delete(app.clone(), &format!("/tecnicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Database exception");

    // Still there.
    let response = get(app, &format!("/tecnicos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// GET /tecnicos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_page_of_technicians() {
    let (app, _) = build_memory_app();
    create_gustavo(app.clone()).await;

    let response = get(app, "/tecnicos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
    assert_eq!(json["content"][0]["nome"], "Gustavo");
    assert!(json["content"][0].get("senha").is_none());
    assert_eq!(json["number"], 0);
    assert_eq!(json["totalElements"], 1);
}

#[tokio::test]
async fn list_page_size_one_over_two_rows() {
    let (app, _) = build_memory_app();
    create_gustavo(app.clone()).await;
    let mut ana = gustavo();
    ana["nome"] = serde_json::json!("Ana");
    post_json(app.clone(), "/tecnicos", ana).await;

    let json = body_json(get(app, "/tecnicos?page=0&size=1").await).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
    assert!(json["totalPages"].as_i64().unwrap() >= 2);
    assert_eq!(json["first"], true);
    assert_eq!(json["last"], false);
}

#[tokio::test]
async fn list_sorts_by_requested_property() {
    let (app, _) = build_memory_app();
    for name in ["Carla", "Ana", "Bruno"] {
        let mut body = gustavo();
        body["nome"] = serde_json::json!(name);
        post_json(app.clone(), "/tecnicos", body).await;
    }

    let json = body_json(get(app, "/tecnicos?sort=nome,desc").await).await;
    let names: Vec<_> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["nome"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Carla", "Bruno", "Ana"]);
    assert_eq!(json["sort"]["direction"], "DESC");
}

#[tokio::test]
async fn list_past_last_page_is_empty() {
    let (app, _) = build_memory_app();
    create_gustavo(app.clone()).await;

    let json = body_json(get(app, "/tecnicos?page=9&size=5").await).await;
    assert_eq!(json["empty"], true);
    assert_eq!(json["totalElements"], 1);
}

#[tokio::test]
async fn list_with_unsortable_property_returns_400() {
    let (app, _) = build_memory_app();
    let response = get(app, "/tecnicos?sort=senha").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Validation error");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_allows_any_origin() {
    let (app, _) = build_memory_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/tecnicos/1")
        .header("origin", "https://qualquer.example")
        .header("access-control-request-method", "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app, request).await;
    assert!(response.status().is_success());
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let allowed: Vec<String> = response.headers()[ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .split(',')
        .map(|m| m.trim().to_ascii_uppercase())
        .collect();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(allowed.iter().any(|m| m == method), "{method} missing from {allowed:?}");
    }
}
