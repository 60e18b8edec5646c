#![allow(dead_code)]
//! Shared harness for the HTTP integration tests.
//!
//! Mirrors the router construction in `main.rs` (same middleware stack) but
//! points the request store at a throwaway temp file so tests are isolated.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use cleanvit_backend::api::auth::CleanerDirectory;
use cleanvit_backend::app;
use cleanvit_backend::app_state::AppState;
use cleanvit_backend::db::store::RequestStore;

pub struct TestApp {
    pub app: Router,
    pub data_file: PathBuf,
    // Keeps the temp dir alive for the duration of the test.
    _dir: tempfile::TempDir,
}

pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let data_file = dir.path().join("data.json");
    let state = AppState {
        store: Arc::new(RequestStore::new(&data_file)),
        cleaners: Arc::new(CleanerDirectory::with_default_roster()),
    };
    TestApp {
        app: app(state),
        data_file,
        _dir: dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
