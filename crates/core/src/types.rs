//! Wire-facing value types shared by the evaluator and the HTTP layer.

use serde::{Deserialize, Serialize};

/// One submitted sensor payload.
///
/// Field names follow the device protocol (`firmwareVersion`, `temperature`,
/// `humidity`). PascalCase aliases are accepted for older firmware that sends
/// `FirmwareVersion` etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    #[serde(alias = "FirmwareVersion")]
    pub firmware_version: String,
    #[serde(alias = "Temperature")]
    pub temperature: f64,
    #[serde(alias = "Humidity")]
    pub humidity: f64,
}

impl Reading {
    pub fn new(firmware_version: impl Into<String>, temperature: f64, humidity: f64) -> Self {
        Self {
            firmware_version: firmware_version.into(),
            temperature,
            humidity,
        }
    }
}

/// Kind of out-of-range finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertType {
    HumidityOutOfRange,
    TemperatureOutOfRange,
}

impl AlertType {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::HumidityOutOfRange => "HumidityOutOfRange",
            AlertType::TemperatureOutOfRange => "TemperatureOutOfRange",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single out-of-range finding attached to a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub alert_type: AlertType,
    pub message: String,
}

impl Alert {
    pub fn new(alert_type: AlertType, message: impl Into<String>) -> Self {
        Self {
            alert_type,
            message: message.into(),
        }
    }
}
