//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cutscene_api::config::{Config, Pacing};
use cutscene_api::state::{AppState, LoadedContent};
use cutscene_character::domain::selection::SelectionHolder;
use cutscene_core::clock::Clock;
use cutscene_storage::InMemoryStore;
use cutscene_test_support::FixedClock;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with the built-in script, an in-memory store
/// and a deterministic clock. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    let state = AppState::new(
        fixed_clock(),
        Arc::new(InMemoryStore::new()),
        LoadedContent::builtin(),
        SelectionHolder::new(),
        Pacing::default(),
    );
    cutscene_api::router(state)
}

/// Fresh path for a JSON store file in the system temp dir.
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("cutscene-api-{}.json", Uuid::new_v4()))
}

/// Configuration with a file store at `store_path` and everything else
/// defaulted.
pub fn config_with_store(store_path: PathBuf) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        store_path: Some(store_path),
        script_path: None,
        pacing: Pacing::default(),
    }
}

/// Build the app the way `main.rs` does, from `config`.
pub async fn bootstrap_app(config: &Config) -> Router {
    let state = AppState::bootstrap(config).await.unwrap();
    cutscene_api::router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a request without a body and return the response.
pub async fn request_json(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    request_json(app, "GET", uri).await
}
