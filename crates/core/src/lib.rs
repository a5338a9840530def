//! Climate monitor domain logic.
//!
//! Pure, synchronous evaluation of device readings: credential check,
//! firmware version validation and sensor threshold alerts. No I/O, no
//! logging; the HTTP layer in `climate-api` owns both.

pub mod credentials;
pub mod error;
pub mod evaluation;
pub mod semver;
pub mod thresholds;
pub mod types;
