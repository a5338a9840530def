pub mod health;
pub mod readings;

use axum::Router;

use crate::state::AppState;

/// Build the device-facing route tree.
///
/// Route hierarchy:
///
/// ```text
/// /readings/evaluate                               evaluate a reading (POST)
/// ```
///
/// Mounted at the root: deployed devices post to `/readings/evaluate`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/readings", readings::router())
}
