//! What an article handler decided to answer.
//!
//! Every handler returns `AppResult<Outcome>`: `Ok` carries the page,
//! redirect or bare 404 chosen by the handler, `Err` goes through
//! [`crate::error::AppError`]'s error page. Exactly one response is produced
//! per request either way.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

#[derive(Debug)]
pub enum Outcome {
    /// A rendered view (`200 OK`).
    Page(String),
    /// `303 See Other` to the given path, so the browser follows with a GET.
    Redirect(String),
    /// Bare `404 Not Found` with an empty body.
    NotFound,
}

impl Outcome {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Page(html) => Html(html).into_response(),
            Outcome::Redirect(path) => Redirect::to(&path).into_response(),
            Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
