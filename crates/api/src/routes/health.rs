use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /health -- liveness probe.
///
/// Deliberately does not touch the database: it answers "is the process
/// serving requests", nothing more.
async fn health_check() -> &'static str {
    "OK"
}

/// Mount the health check route (root-level, outside the visits API).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
