use std::sync::Arc;

use climate_core::evaluation::ReadingEvaluator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reading evaluation pipeline, built from the configured secret allow-list.
    pub evaluator: Arc<ReadingEvaluator>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let evaluator = ReadingEvaluator::new(config.device_secrets.clone());
        Self {
            config: Arc::new(config),
            evaluator: Arc::new(evaluator),
        }
    }
}
