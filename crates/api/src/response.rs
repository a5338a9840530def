//! RFC 7807 problem-detail bodies for error responses.
//!
//! Handler errors are rendered as a [`ProblemDetails`] body served as
//! `application/problem+json`. Router-level 404, 405 and 408 responses keep
//! their empty bodies. Field-level validation failures populate `errors`,
//! keyed by field name.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Media type for problem-detail bodies.
pub const PROBLEM_JSON: &str = "application/problem+json";

const TYPE_BAD_REQUEST: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const TYPE_UNAUTHORIZED: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.2";
const TYPE_UNSUPPORTED_MEDIA_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.16";
const TYPE_INTERNAL: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

/// Title used for all field-level validation problems.
pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Problem-detail body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field name -> messages. Only present on validation problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    /// 401 with a human-readable detail.
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self {
            type_uri: TYPE_UNAUTHORIZED.to_string(),
            title: "Unauthorized".to_string(),
            status: StatusCode::UNAUTHORIZED.as_u16(),
            detail: Some(detail.into()),
            errors: None,
        }
    }

    /// 400 carrying a single field error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![message.into()]);
        Self {
            type_uri: TYPE_BAD_REQUEST.to_string(),
            title: VALIDATION_TITLE.to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail: None,
            errors: Some(errors),
        }
    }

    /// 415 for a body sent without a JSON content type.
    pub fn unsupported_media_type(detail: impl Into<String>) -> Self {
        Self {
            type_uri: TYPE_UNSUPPORTED_MEDIA_TYPE.to_string(),
            title: "Unsupported Media Type".to_string(),
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE.as_u16(),
            detail: Some(detail.into()),
            errors: None,
        }
    }

    /// 500 with a sanitized detail.
    pub fn internal() -> Self {
        Self {
            type_uri: TYPE_INTERNAL.to_string(),
            title: "Internal Server Error".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: Some("An internal error occurred".to_string()),
            errors: None,
        }
    }

    /// Messages recorded for `field`, if any.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(Vec::as_slice)
    }
}
