//! Helpers for route unit tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use cutscene_character::domain::selection::SelectionHolder;
use cutscene_core::storage::KeyValueStore;
use cutscene_test_support::{FixedClock, RecordingStore, ScriptedContent};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::config::Pacing;
use crate::state::{AppState, LoadedContent};

pub(crate) fn app_state_with(store: Arc<dyn KeyValueStore>, content: ScriptedContent) -> AppState {
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()));
    let content = LoadedContent {
        source: Arc::new(content),
        origin: "test".to_owned(),
        version_hash: None,
    };
    AppState::new(clock, store, content, SelectionHolder::new(), Pacing::default())
}

pub(crate) fn test_app_state() -> AppState {
    app_state_with(Arc::new(RecordingStore::new()), ScriptedContent::default())
}

pub(crate) async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
