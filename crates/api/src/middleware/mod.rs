//! Request extractors.
//!
//! - [`device_secret::DeviceSecret`] -- The device's shared secret header.

pub mod device_secret;
