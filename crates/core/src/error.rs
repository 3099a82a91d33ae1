/// Domain errors shared by the repository and API layers.
///
/// Variants carry enough context to render a useful message without
/// exposing anything internal. HTTP status mapping happens in the API
/// crate, not here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the lookup. Visits are keyed by URL, so the key is
    /// carried as a string rather than a numeric id.
    #[error("{entity} for {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// Input rejected at the boundary before touching the database.
    #[error("Validation failed: {0}")]
    Validation(String),
}
