use articles_core::error::CoreError;
use articles_db::StoreError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Application-level error type for HTTP handlers.
///
/// Handlers recover validation failures and missing rows themselves; whatever
/// reaches this type is turned into a response by [`IntoResponse`], the one
/// place failures are reported.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `articles_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { .. }) => {
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::warn!(count = errors.len(), "Unhandled validation error");
                (StatusCode::BAD_REQUEST, "The submitted form was invalid.")
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
            AppError::Render(err) => {
                tracing::error!(error = ?err, "Template render error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        };

        (status, Html(error_page(status, message))).into_response()
    }
}

const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Static error page. Kept outside the template engine so a broken template
/// can still be reported.
fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
         <body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to articles</a></p>\n</body>\n</html>\n",
        code = status.as_u16(),
    )
}
