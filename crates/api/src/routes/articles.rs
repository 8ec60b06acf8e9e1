//! Route definitions for the article pages, mounted at the site root.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET    /               list_articles
/// POST   /               create_article
/// GET    /new            new_article_form
/// GET    /{id}           show_article
/// GET    /{id}/edit      edit_article_form
/// POST   /{id}/edit      update_article
/// GET    /{id}/delete    delete_article_form
/// POST   /{id}/delete    delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/new", get(articles::new_article_form))
        .route("/{id}", get(articles::show_article))
        .route(
            "/{id}/edit",
            get(articles::edit_article_form).post(articles::update_article),
        )
        .route(
            "/{id}/delete",
            get(articles::delete_article_form).post(articles::delete_article),
        )
}
