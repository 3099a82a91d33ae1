//! Handlers for the visit recording and reporting endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use pagepulse_core::error::CoreError;
use pagepulse_core::visits::{
    recent_limit_in_range, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT, MIN_RECENT_LIMIT,
};
use pagepulse_db::models::visit::{CreateVisit, Visit, VisitStats};
use pagepulse_db::repositories::VisitRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for the per-URL endpoints.
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    /// URL to look up, matched exactly as stored.
    pub url: String,
}

/// Query parameters for the recent-visits endpoint.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    /// Maximum number of rows to return (default: 10, accepted: 1-100).
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /visits
///
/// Record metrics for a visited page.
pub async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<CreateVisit>,
) -> AppResult<(StatusCode, Json<Visit>)> {
    validate_create(&payload)?;

    let visit = VisitRepo::create(&state.pool, &payload).await?;

    tracing::info!(
        url = %visit.url,
        link_count = visit.link_count,
        word_count = visit.word_count,
        image_count = visit.image_count,
        "Visit recorded"
    );

    Ok((StatusCode::CREATED, Json(visit)))
}

/// GET /visits?url=...
///
/// Every visit recorded for a URL, most recent first. An unknown URL
/// yields an empty list, not an error.
pub async fn list_visits(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> AppResult<Json<Vec<Visit>>> {
    let visits = VisitRepo::list_by_url(&state.pool, &query.url).await?;
    Ok(Json(visits))
}

/// GET /visits/latest?url=...
///
/// The most recent visit for a URL; 404 if the URL was never recorded.
pub async fn get_latest_visit(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> AppResult<Json<Visit>> {
    let latest = VisitRepo::get_latest(&state.pool, &query.url).await?;

    let visit = latest.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Visit",
            key: query.url,
        })
    })?;

    Ok(Json(visit))
}

/// GET /visits/stats
///
/// Aggregate statistics over every recorded visit.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<VisitStats>> {
    let stats = VisitRepo::get_stats(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /visits/recent?limit=N
///
/// The most recent visits across all URLs.
pub async fn get_recent_visits(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<Visit>>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    if !recent_limit_in_range(limit) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "limit must be between {MIN_RECENT_LIMIT} and {MAX_RECENT_LIMIT}"
        ))));
    }

    let visits = VisitRepo::get_recent(&state.pool, limit).await?;
    Ok(Json(visits))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create payload before it reaches the database.
///
/// The URL must be non-empty and every reported count non-negative.
/// Breakdown fields left out by the client are fine; present ones are
/// held to the same rule.
fn validate_create(payload: &CreateVisit) -> AppResult<()> {
    if payload.url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "url must not be empty".to_string(),
        )));
    }

    let required = [
        ("link_count", payload.link_count),
        ("word_count", payload.word_count),
        ("image_count", payload.image_count),
    ];
    for (field, value) in required {
        if value < 0 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must be greater than or equal to 0"
            ))));
        }
    }

    let breakdowns = [
        ("internal_links", payload.internal_links),
        ("external_links", payload.external_links),
        ("content_images", payload.content_images),
        ("decorative_images", payload.decorative_images),
    ];
    for (field, value) in breakdowns {
        if let Some(count) = value {
            if count < 0 {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "{field} must be greater than or equal to 0"
                ))));
            }
        }
    }

    Ok(())
}
