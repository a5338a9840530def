//! Device shared-secret extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the device's shared secret.
pub const DEVICE_SECRET_HEADER: &str = "x-device-shared-secret";

/// Shared secret taken from the `x-device-shared-secret` header.
///
/// Never rejects: a missing or non-UTF-8 header yields an empty secret, which
/// the evaluator treats like any other unknown secret.
///
/// ```ignore
/// async fn my_handler(secret: DeviceSecret) -> AppResult<Json<()>> {
///     tracing::debug!(present = !secret.is_empty(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeviceSecret(String);

impl DeviceSecret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keep secrets out of logs and panic messages.
impl std::fmt::Debug for DeviceSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DeviceSecret").field(&"<redacted>").finish()
    }
}

impl<S> FromRequestParts<S> for DeviceSecret
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(DEVICE_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok(DeviceSecret(secret))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> DeviceSecret {
        let (mut parts, ()) = request.into_parts();
        DeviceSecret::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_header_value() {
        let request = Request::builder()
            .header(DEVICE_SECRET_HEADER, "secret-ABC-123-XYZ-001")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_str(), "secret-ABC-123-XYZ-001");
    }

    #[tokio::test]
    async fn missing_header_is_empty() {
        let request = Request::builder().body(()).unwrap();
        assert!(extract(request).await.is_empty());
    }

    #[tokio::test]
    async fn non_utf8_header_is_empty() {
        let value = axum::http::HeaderValue::from_bytes(&[0xFF, 0xFE]).unwrap();
        let request = Request::builder()
            .header(DEVICE_SECRET_HEADER, value)
            .body(())
            .unwrap();
        assert!(extract(request).await.is_empty());
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = DeviceSecret("top-secret".to_string());
        assert!(!format!("{secret:?}").contains("top-secret"));
    }
}
