use axum::routing::{get, post};
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Mount the visits routes. Every path is a fixed segment; URLs are
/// passed as query parameters, never as path parameters.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/visits",
            post(visits::create_visit).get(visits::list_visits),
        )
        .route("/visits/latest", get(visits::get_latest_visit))
        .route("/visits/stats", get(visits::get_stats))
        .route("/visits/recent", get(visits::get_recent_visits))
}
