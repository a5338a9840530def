//! Handlers for the `/readings` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use climate_core::types::{Alert, Reading};

use crate::error::{AppError, AppResult};
use crate::middleware::device_secret::DeviceSecret;
use crate::state::AppState;

/// POST /readings/evaluate
///
/// Evaluate one sensor reading and return the alerts it raises. The body is
/// parsed before the secret is checked, so a body error wins over a bad secret.
///
/// - 415 when the request does not declare `Content-Type: application/json`.
/// - 400 with a `body` field error when the JSON does not parse as a reading.
/// - 401 when the `x-device-shared-secret` header is missing or unknown.
/// - 400 with a `FirmwareVersion` field error when the firmware string is not
///   semantic versioning.
/// - 200 with a (possibly empty) alert array otherwise.
pub async fn evaluate_reading(
    State(state): State<AppState>,
    secret: DeviceSecret,
    body: Result<Json<Reading>, JsonRejection>,
) -> AppResult<Json<Vec<Alert>>> {
    let Json(reading) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected reading body");
        match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::UnsupportedMediaType(rejection.body_text())
            }
            _ => AppError::MalformedBody(rejection.body_text()),
        }
    })?;

    let outcome = state.evaluator.evaluate(secret.as_str(), &reading);
    let alerts = outcome.into_result().inspect_err(|rejection| {
        tracing::warn!(
            reason = %rejection,
            secret_present = !secret.is_empty(),
            firmware_version = %reading.firmware_version,
            "Reading rejected"
        );
    })?;

    for alert in &alerts {
        tracing::debug!(alert_type = %alert.alert_type, "Alert raised");
    }
    tracing::info!(
        firmware_version = %reading.firmware_version,
        alert_count = alerts.len(),
        "Reading evaluated"
    );

    Ok(Json(alerts))
}
