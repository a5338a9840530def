use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use climate_core::error::Rejection;
use climate_core::semver::FIRMWARE_FIELD;

use crate::response::{ProblemDetails, PROBLEM_JSON};

/// Field key used when the request body itself could not be parsed.
pub const BODY_FIELD: &str = "body";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`Rejection`] for evaluation rejections and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce problem-detail bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The evaluator refused the reading.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The request body was not a well-formed reading.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The request did not declare a JSON body.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// An internal error with a human-readable message (never sent to clients).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build the problem-detail body for this error.
    pub fn problem(&self) -> ProblemDetails {
        match self {
            AppError::Rejected(Rejection::Unauthorized) => {
                ProblemDetails::unauthorized(Rejection::Unauthorized.to_string())
            }
            AppError::Rejected(Rejection::InvalidFirmware(msg)) => {
                ProblemDetails::validation(FIRMWARE_FIELD, msg.clone())
            }
            AppError::MalformedBody(msg) => ProblemDetails::validation(BODY_FIELD, msg.clone()),
            AppError::UnsupportedMediaType(msg) => {
                ProblemDetails::unsupported_media_type(msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ProblemDetails::internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.problem();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, [(CONTENT_TYPE, PROBLEM_JSON)], axum::Json(problem)).into_response()
    }
}
