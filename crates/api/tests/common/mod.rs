#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use ordem_db::repositories::{InMemoryTecnicoRepo, PgTecnicoRepo, TecnicoRepository};
use sqlx::PgPool;
use tower::ServiceExt;

use ordem_api::config::{CorsOrigins, LogFormat, ServerConfig, StorageBackend};
use ordem_api::router::build_app_router;
use ordem_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given repository.
///
/// Goes through `build_app_router`, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, error envelope) as production.
pub fn build_app(repo: Arc<dyn TecnicoRepository>) -> Router {
    let config = test_config();
    build_app_router(AppState::new(repo, config.clone()), &config)
}

/// App backed by a fresh in-memory store, returned alongside the store so
/// tests can seed references.
pub fn build_memory_app() -> (Router, Arc<InMemoryTecnicoRepo>) {
    let repo = Arc::new(InMemoryTecnicoRepo::new());
    (build_app(repo.clone()), repo)
}

/// App backed by PostgreSQL.
pub fn build_pg_app(pool: PgPool) -> Router {
    build_app(Arc::new(PgTecnicoRepo::new(pool)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// The technician used throughout the HTTP scenarios.
pub fn gustavo() -> serde_json::Value {
    serde_json::json!({
        "nome": "Gustavo",
        "telefone": "67999999999",
        "email": "aaa@gmail.com",
        "senha": "senha"
    })
}
