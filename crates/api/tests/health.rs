//! Health endpoint and cross-cutting middleware behaviour.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use climate_core::credentials::SecretAllowList;
use common::{body_json, build_test_app, get};
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_version_and_secret_count() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["device_secrets"], 3);
}

#[tokio::test]
async fn health_counts_configured_secrets() {
    let mut config = common::test_config();
    config.device_secrets = SecretAllowList::new(["a", "b", "c", "d", "e"]);

    let json = body_json(get(common::build_test_app_with(config), "/health").await).await;
    assert_eq!(json["device_secrets"], 5);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let response = get(build_test_app(), "/readings").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn evaluate_rejects_get() {
    let response = get(build_test_app(), "/readings/evaluate").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn every_response_gets_a_request_id() {
    let response = get(build_test_app(), "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    // Hyphenated UUID.
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "sensor-batch-42")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "sensor-batch-42");
}

#[tokio::test]
async fn preflight_allows_secret_header_from_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/readings/evaluate")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "content-type,x-device-shared-secret",
        )
        .body(Body::empty())
        .unwrap();

    let response = build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    assert!(allowed.contains("x-device-shared-secret"), "got {allowed}");
}
