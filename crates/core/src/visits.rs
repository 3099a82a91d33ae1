//! Query rules for visit listings.
//!
//! Lives here so the HTTP boundary and the repository layer agree on the
//! same bounds without the db crate depending on the api crate.

/// Number of rows the recent-visits listing returns when the caller does
/// not ask for a specific limit.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Smallest accepted `limit` for the recent-visits listing.
pub const MIN_RECENT_LIMIT: i64 = 1;

/// Largest accepted `limit` for the recent-visits listing.
pub const MAX_RECENT_LIMIT: i64 = 100;

/// Whether a requested limit is inside the accepted range.
///
/// Out-of-range values are rejected at the HTTP boundary, never silently
/// clamped.
pub fn recent_limit_in_range(limit: i64) -> bool {
    (MIN_RECENT_LIMIT..=MAX_RECENT_LIMIT).contains(&limit)
}
