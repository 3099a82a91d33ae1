//! Primitive type aliases shared across the workspace.

/// Database row identifier. Maps to PostgreSQL `BIGSERIAL`.
pub type DbId = i64;

/// UTC timestamp as stored in `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
