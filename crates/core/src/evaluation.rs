//! Reading evaluation pipeline.
//!
//! ```text
//! credential check -> firmware check -> threshold check -> alerts
//! ```
//!
//! The credential and firmware checks short-circuit; the threshold checks all
//! run. Every step is pure, so the same `(secret, reading)` pair always yields
//! the same outcome.

use crate::credentials::SecretAllowList;
use crate::error::Rejection;
use crate::semver::{is_valid_version, FIRMWARE_FORMAT_MESSAGE};
use crate::thresholds;
use crate::types::{Alert, Reading};

/// Result of evaluating one reading. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationOutcome {
    Unauthorized,
    InvalidFirmware(String),
    /// Possibly empty, humidity alert before temperature alert.
    Alerts(Vec<Alert>),
}

impl EvaluationOutcome {
    /// Split into the alert list or the rejection that stopped evaluation.
    pub fn into_result(self) -> Result<Vec<Alert>, Rejection> {
        match self {
            EvaluationOutcome::Unauthorized => Err(Rejection::Unauthorized),
            EvaluationOutcome::InvalidFirmware(message) => Err(Rejection::InvalidFirmware(message)),
            EvaluationOutcome::Alerts(alerts) => Ok(alerts),
        }
    }
}

/// Runs the evaluation pipeline against a fixed secret allow-list.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct ReadingEvaluator {
    secrets: SecretAllowList,
}

impl ReadingEvaluator {
    pub fn new(secrets: SecretAllowList) -> Self {
        Self { secrets }
    }

    pub fn secrets(&self) -> &SecretAllowList {
        &self.secrets
    }

    /// Evaluate a reading submitted with `secret`.
    ///
    /// A missing secret should be passed as `""`; it is rejected like any
    /// other unknown secret.
    pub fn evaluate(&self, secret: &str, reading: &Reading) -> EvaluationOutcome {
        if !self.secrets.is_valid(secret) {
            return EvaluationOutcome::Unauthorized;
        }

        if !is_valid_version(&reading.firmware_version) {
            return EvaluationOutcome::InvalidFirmware(FIRMWARE_FORMAT_MESSAGE.to_string());
        }

        EvaluationOutcome::Alerts(thresholds::evaluate(reading))
    }
}
