#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cyclear_core::lqs::LqsPolicy;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cyclear_api::config::ServerConfig;
use cyclear_api::router::build_app_router;
use cyclear_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        lqs_policy_path: None,
    }
}

/// Build the full application router with the default scoring policy.
pub fn build_test_app() -> Router {
    build_test_app_with_policy(LqsPolicy::default())
}

/// Build the full application router with a custom scoring policy.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack as production.
pub fn build_test_app_with_policy(policy: LqsPolicy) -> Router {
    let state = AppState {
        policy: Arc::new(policy),
    };
    build_app_router(state, &test_config())
}

/// Issue a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Issue a POST request with a raw body and a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
