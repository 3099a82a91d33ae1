//! HTTP-level integration tests for request validation.
//!
//! Invalid payloads and query parameters must be rejected at the boundary
//! with a `validation_error` envelope, and must never reach the database.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// POST /visits payload validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_required_count_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/visits",
        serde_json::json!({
            "url": "https://example.com",
            "link_count": -1,
            "word_count": 100,
            "image_count": 2
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
    assert!(json["message"].as_str().unwrap().contains("link_count"));
    assert_eq!(json["status_code"], 422);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_breakdown_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/visits",
        serde_json::json!({
            "url": "https://example.com",
            "link_count": 5,
            "word_count": 100,
            "image_count": 2,
            "decorative_images": -4
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("decorative_images"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_url_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/visits",
        serde_json::json!({
            "url": "",
            "link_count": 5,
            "word_count": 100,
            "image_count": 2
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    // link_count is absent entirely; the JSON extractor rejects this
    // before the handler runs.
    let response = post_json(
        app,
        "/visits",
        serde_json::json!({
            "url": "https://example.com",
            "word_count": 100,
            "image_count": 2
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rejected_payload_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/visits",
        serde_json::json!({
            "url": "https://example.com",
            "link_count": -1,
            "word_count": -1,
            "image_count": -1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The failed request must leave no partial row behind.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/visits?url=https%3A%2F%2Fexample.com").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let response = get(app, "/visits/stats").await;
    let json = body_json(response).await;
    assert_eq!(json["total_visits"], 0);
}

// ---------------------------------------------------------------------------
// GET /visits/recent limit validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_limit_zero_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/visits/recent?limit=0").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
    assert!(json["message"].as_str().unwrap().contains("between 1 and 100"));
    assert_eq!(json["status_code"], 422);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_limit_above_max_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/visits/recent?limit=101").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_limit_bounds_are_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/visits/recent?limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/visits/recent?limit=100").await;
    assert_eq!(response.status(), StatusCode::OK);
}
