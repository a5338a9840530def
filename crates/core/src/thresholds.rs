//! Sensor threshold evaluation.
//!
//! Each sensor has a closed valid range. Every check in [`SENSOR_CHECKS`] runs
//! for every reading (no short-circuit) and alerts come out in table order.

use std::ops::RangeInclusive;

use crate::types::{Alert, AlertType, Reading};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid relative humidity, in percent.
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Valid temperature, in degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -10.0..=50.0;

pub const HUMIDITY_OUT_OF_RANGE_MESSAGE: &str = "Humidity sensor is out of range.";
pub const TEMPERATURE_OUT_OF_RANGE_MESSAGE: &str = "Temperature sensor is out of range.";

// ---------------------------------------------------------------------------
// Check table
// ---------------------------------------------------------------------------

/// One range predicate over a reading.
#[derive(Clone)]
pub struct SensorCheck {
    pub alert_type: AlertType,
    pub valid_range: RangeInclusive<f64>,
    pub message: &'static str,
    /// Selects the reading field this check inspects.
    pub value: fn(&Reading) -> f64,
}

impl SensorCheck {
    /// Returns an alert when the selected value is outside the valid range.
    ///
    /// NaN and infinities fall outside every range.
    pub fn check(&self, reading: &Reading) -> Option<Alert> {
        let value = (self.value)(reading);
        if self.valid_range.contains(&value) {
            None
        } else {
            Some(Alert::new(self.alert_type, self.message))
        }
    }
}

/// Ordered checks: humidity first, then temperature.
pub static SENSOR_CHECKS: [SensorCheck; 2] = [
    SensorCheck {
        alert_type: AlertType::HumidityOutOfRange,
        valid_range: HUMIDITY_RANGE,
        message: HUMIDITY_OUT_OF_RANGE_MESSAGE,
        value: humidity,
    },
    SensorCheck {
        alert_type: AlertType::TemperatureOutOfRange,
        valid_range: TEMPERATURE_RANGE,
        message: TEMPERATURE_OUT_OF_RANGE_MESSAGE,
        value: temperature,
    },
];

fn humidity(reading: &Reading) -> f64 {
    reading.humidity
}

fn temperature(reading: &Reading) -> f64 {
    reading.temperature
}

/// Run every sensor check and collect the resulting alerts in table order.
pub fn evaluate(reading: &Reading) -> Vec<Alert> {
    evaluate_with(&SENSOR_CHECKS, reading)
}

/// Run an arbitrary check table against a reading.
pub fn evaluate_with(checks: &[SensorCheck], reading: &Reading) -> Vec<Alert> {
    checks.iter().filter_map(|check| check.check(reading)).collect()
}
