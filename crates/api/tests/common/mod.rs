//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real application router (full middleware stack) through
//! `tower::ServiceExt::oneshot`, backed by the in-memory record store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use suitebridge_api::config::{ServerConfig, StoreBackend};
use suitebridge_api::router::build_app_router;
use suitebridge_api::state::AppState;
use suitebridge_store::MemoryStore;

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        projects_search_id: 6546,
        store: StoreBackend::Memory,
        netsuite: None,
    }
}

/// Build the application router plus a handle on its backing store, so tests
/// can seed records and saved searches directly.
pub fn build_test_app_with_store() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let store_dyn: Arc<dyn suitebridge_store::RecordStore> = store.clone();
    let config = test_config();
    let state = AppState {
        store: store_dyn,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), store)
}

/// Build the application router with a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_store().0
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
