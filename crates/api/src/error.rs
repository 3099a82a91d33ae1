use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagepulse_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform error envelope:
///
/// ```json
/// { "error": "<category>", "message": "...", "status_code": 404, "data": {} }
/// ```
///
/// Categories: `validation_error`, `not_found`, `conflict`,
/// `database_error`, `server_error`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pagepulse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An unexpected error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, category, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::info!(entity = %entity, key = %key, "Resource not found");
                    (
                        StatusCode::NOT_FOUND,
                        "not_found",
                        format!("{entity} for {key} not found"),
                    )
                }
                CoreError::Validation(msg) => {
                    tracing::warn!(error = %msg, "Validation failed");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "validation_error",
                        msg.clone(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Anything else ---
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let body = json!({
            "error": category,
            "message": message,
            "status_code": status.as_u16(),
            "data": {},
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, category, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (PostgreSQL code 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message; the detail
///   goes to the log, never to the client.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "not_found",
            "Requested resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                tracing::warn!(
                    constraint = db_err.constraint().unwrap_or("unknown"),
                    "Unique constraint violation"
                );
                return (
                    StatusCode::CONFLICT,
                    "conflict",
                    "Duplicate entry found".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "A database error occurred. Please try again later.".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "A database error occurred. Please try again later.".to_string(),
            )
        }
    }
}
