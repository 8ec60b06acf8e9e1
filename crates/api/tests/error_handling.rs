//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use articles_api::error::AppError;
use articles_core::error::{CoreError, FieldError};
use articles_db::StoreError;
use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn not_found_is_bare_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Article",
        id: 42,
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unhandled_validation_error_returns_400_page() {
    let err = AppError::Core(CoreError::Validation(vec![FieldError::new(
        "title",
        "Title must not be empty",
    )]));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let (status, body) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("pool timed out"));
}

#[test]
fn store_errors_convert_by_kind() {
    let core: AppError = StoreError::Core(CoreError::NotFound {
        entity: "Article",
        id: 7,
    })
    .into();
    assert_matches!(core, AppError::Core(CoreError::NotFound { id: 7, .. }));

    let db: AppError = StoreError::Database(sqlx::Error::PoolClosed).into();
    assert_matches!(db, AppError::Database(sqlx::Error::PoolClosed));
}
