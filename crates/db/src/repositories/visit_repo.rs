//! Repository for the `visits` table (append-only).

use sqlx::PgPool;

use crate::models::visit::{CreateVisit, Visit, VisitStats};

/// Column list for `visits` SELECT queries (includes `id` and timestamps).
const COLUMNS: &str = "\
    id, url, link_count, internal_links, external_links, \
    word_count, image_count, content_images, decorative_images, \
    created_at, updated_at";

/// Column list for `visits` INSERT statements (excludes auto-generated `id` and timestamps).
const INSERT_COLUMNS: &str = "\
    url, link_count, internal_links, external_links, \
    word_count, image_count, content_images, decorative_images";

/// Provides query operations for page visits.
pub struct VisitRepo;

impl VisitRepo {
    /// Insert a single visit and return the stored row.
    ///
    /// The RETURNING clause carries back the database-assigned `id` and
    /// timestamps, so the caller sees exactly what was persisted.
    pub async fn create(pool: &PgPool, visit: &CreateVisit) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(&visit.url)
            .bind(visit.link_count)
            .bind(visit.internal_links)
            .bind(visit.external_links)
            .bind(visit.word_count)
            .bind(visit.image_count)
            .bind(visit.content_images)
            .bind(visit.decorative_images)
            .fetch_one(pool)
            .await
    }

    /// Get every visit recorded for a URL, most recent first.
    ///
    /// Rows sharing a `created_at` fall back to `id` descending so the
    /// ordering is reproducible.
    pub async fn list_by_url(pool: &PgPool, url: &str) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits \
             WHERE url = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(url)
            .fetch_all(pool)
            .await
    }

    /// Get the most recent visit for a URL, if the URL has any.
    pub async fn get_latest(pool: &PgPool, url: &str) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits \
             WHERE url = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Get up to `limit` visits across all URLs, most recent first.
    ///
    /// `limit` must already be validated at the boundary.
    pub async fn get_recent(pool: &PgPool, limit: i64) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Compute aggregate statistics over all visits in a single pass.
    ///
    /// `AVG` ignores NULLs, so each average covers only the rows where
    /// that metric was reported; `COALESCE` turns the no-data case into 0.
    /// Averages are rounded to two decimal places before the FLOAT8 cast.
    pub async fn get_stats(pool: &PgPool) -> Result<VisitStats, sqlx::Error> {
        let query = "\
            SELECT \
                COUNT(*)::BIGINT AS total_visits, \
                COUNT(DISTINCT url)::BIGINT AS unique_urls, \
                COALESCE(ROUND(AVG(link_count), 2), 0)::FLOAT8 AS average_links, \
                COALESCE(ROUND(AVG(internal_links), 2), 0)::FLOAT8 AS average_internal_links, \
                COALESCE(ROUND(AVG(external_links), 2), 0)::FLOAT8 AS average_external_links, \
                COALESCE(ROUND(AVG(word_count), 2), 0)::FLOAT8 AS average_words, \
                COALESCE(ROUND(AVG(image_count), 2), 0)::FLOAT8 AS average_images, \
                COALESCE(ROUND(AVG(content_images), 2), 0)::FLOAT8 AS average_content_images, \
                COALESCE(ROUND(AVG(decorative_images), 2), 0)::FLOAT8 AS average_decorative_images \
            FROM visits";
        sqlx::query_as::<_, VisitStats>(query)
            .fetch_one(pool)
            .await
    }
}
