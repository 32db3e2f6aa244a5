//! Router test helpers
//!
//! The app built here points at a port nothing listens on, so every
//! connection attempt fails fast with a connect error.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::config::{DbConfig, ErrorDetail};
use crate::db::ConnectionProvider;

pub fn unreachable_app(detail: ErrorDetail) -> Router {
    let config = DbConfig {
        host: Some("127.0.0.1".into()),
        port: 1,
        user: Some("nobody".into()),
        ..DbConfig::default()
    };
    build_router(AppState::new(ConnectionProvider::new(&config), detail))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
