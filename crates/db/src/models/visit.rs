//! Visit entity model and DTOs.
//!
//! A visit is one observation of a page's metrics. The link and image
//! totals are always present; their breakdowns (internal/external links,
//! content/decorative images) are optional because not every client
//! computes them. Absent breakdowns stay NULL in storage so they can be
//! told apart from a measured zero.

use pagepulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single recorded page visit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visit {
    pub id: DbId,
    pub url: String,
    pub link_count: i32,
    pub internal_links: Option<i32>,
    pub external_links: Option<i32>,
    pub word_count: i32,
    pub image_count: i32,
    pub content_images: Option<i32>,
    pub decorative_images: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a new visit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVisit {
    pub url: String,
    pub link_count: i32,
    pub internal_links: Option<i32>,
    pub external_links: Option<i32>,
    pub word_count: i32,
    pub image_count: i32,
    pub content_images: Option<i32>,
    pub decorative_images: Option<i32>,
}

/// Aggregate view across every recorded visit.
///
/// Averages are means over non-NULL values only, rounded to two decimal
/// places; a metric with no data at all reports 0 rather than NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitStats {
    pub total_visits: i64,
    pub unique_urls: i64,
    pub average_links: f64,
    pub average_internal_links: f64,
    pub average_external_links: f64,
    pub average_words: f64,
    pub average_images: f64,
    pub average_content_images: f64,
    pub average_decorative_images: f64,
}
