#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use climate_api::config::{LogFormat, ServerConfig};
use climate_api::middleware::device_secret::DEVICE_SECRET_HEADER;
use climate_api::router::build_app_router;
use climate_api::state::AppState;
use climate_core::credentials::SecretAllowList;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const VALID_SECRET: &str = "secret-ABC-123-XYZ-001";

/// Build a test `ServerConfig` with safe defaults and the sample secrets.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        device_secrets: SecretAllowList::sample(),
        using_sample_secrets: true,
    }
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

/// Build the application router with a custom configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body, optionally with a device secret header.
pub async fn post_json(
    app: Router,
    uri: &str,
    secret: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    post_raw(app, uri, secret, body.to_string()).await
}

/// POST a raw string body as `application/json`.
pub async fn post_raw(
    app: Router,
    uri: &str,
    secret: Option<&str>,
    body: String,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(secret) = secret {
        builder = builder.header(DEVICE_SECRET_HEADER, secret);
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a reading to `/readings/evaluate`.
pub async fn evaluate(
    app: Router,
    secret: Option<&str>,
    firmware: &str,
    humidity: f64,
    temperature: f64,
) -> Response<Body> {
    let body = serde_json::json!({
        "firmwareVersion": firmware,
        "humidity": humidity,
        "temperature": temperature,
    });
    post_json(app, "/readings/evaluate", secret, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
