//! Handlers for the article pages.
//!
//! Each handler makes at most one lookup and one write through the store,
//! then renders a page, redirects, or answers a bare 404.

use articles_core::article::ArticleFields;
use articles_core::error::CoreError;
use articles_db::articles::{self, StoreError};
use articles_db::models::article::{Article, DraftArticle};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Form;

use crate::error::AppResult;
use crate::response::Outcome;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn detail_path(article: &Article) -> String {
    format!("/{}", article.id)
}

/// The `{id}` path segment. Segments that are not UTF-8 once percent-decoded
/// come through as a rejection and are answered as not found.
type RawId = Result<Path<String>, PathRejection>;

/// Look up an article by its raw path segment.
async fn lookup(state: &AppState, id: RawId) -> AppResult<Option<Article>> {
    let Ok(Path(id)) = id else {
        tracing::debug!("Undecodable article id");
        return Ok(None);
    };
    Ok(articles::find_by_key(state.store.as_ref(), &id).await?)
}

/* --------------------------------------------------------------------------
Collection
-------------------------------------------------------------------------- */

/// GET /
///
/// List every article, newest first.
pub async fn list_articles(State(state): State<AppState>) -> AppResult<Outcome> {
    let all = articles::find_all(state.store.as_ref()).await?;
    tracing::debug!(count = all.len(), "Listing articles");
    Ok(Outcome::Page(state.views.listing(&all)?))
}

/// GET /new
pub async fn new_article_form(State(state): State<AppState>) -> AppResult<Outcome> {
    Ok(Outcome::Page(
        state.views.new_form(&DraftArticle::default(), &[])?,
    ))
}

/// POST /
///
/// Create an article and redirect to it. A blank title re-renders the form
/// with the submitted values and the validation messages.
pub async fn create_article(
    State(state): State<AppState>,
    Form(fields): Form<ArticleFields>,
) -> AppResult<Outcome> {
    match articles::create(state.store.as_ref(), &fields).await {
        Ok(article) => {
            tracing::info!(article_id = article.id, "Article created");
            Ok(Outcome::redirect(detail_path(&article)))
        }
        Err(StoreError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(count = errors.len(), "Article create rejected");
            let draft = articles::build(&fields);
            Ok(Outcome::Page(state.views.new_form(&draft, &errors)?))
        }
        Err(err) => Err(err.into()),
    }
}

/* --------------------------------------------------------------------------
Single article
-------------------------------------------------------------------------- */

/// GET /{id}
pub async fn show_article(
    State(state): State<AppState>,
    id: RawId,
) -> AppResult<Outcome> {
    let Some(article) = lookup(&state, id).await? else {
        return Ok(Outcome::NotFound);
    };
    Ok(Outcome::Page(state.views.detail(&article)?))
}

/// GET /{id}/edit
pub async fn edit_article_form(
    State(state): State<AppState>,
    id: RawId,
) -> AppResult<Outcome> {
    let Some(article) = lookup(&state, id).await? else {
        return Ok(Outcome::NotFound);
    };
    Ok(Outcome::Page(
        state.views.edit_form(&DraftArticle::from(&article), &[])?,
    ))
}

/// POST /{id}/edit
///
/// Apply the submitted fields and redirect to the article. A blank title
/// re-renders the edit form with the attempted values; the stored row is
/// left as it was.
pub async fn update_article(
    State(state): State<AppState>,
    id: RawId,
    Form(fields): Form<ArticleFields>,
) -> AppResult<Outcome> {
    let Some(article) = lookup(&state, id).await? else {
        return Ok(Outcome::NotFound);
    };

    match articles::update(state.store.as_ref(), &article, &fields).await {
        Ok(updated) => {
            tracing::info!(article_id = updated.id, "Article updated");
            Ok(Outcome::redirect(detail_path(&updated)))
        }
        Err(StoreError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(
                article_id = article.id,
                count = errors.len(),
                "Article update rejected"
            );
            let draft = DraftArticle::for_existing(article.id, &fields);
            Ok(Outcome::Page(state.views.edit_form(&draft, &errors)?))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /{id}/delete
pub async fn delete_article_form(
    State(state): State<AppState>,
    id: RawId,
) -> AppResult<Outcome> {
    let Some(article) = lookup(&state, id).await? else {
        return Ok(Outcome::NotFound);
    };
    Ok(Outcome::Page(state.views.delete_confirmation(&article)?))
}

/// POST /{id}/delete
pub async fn delete_article(
    State(state): State<AppState>,
    id: RawId,
) -> AppResult<Outcome> {
    let Some(article) = lookup(&state, id).await? else {
        return Ok(Outcome::NotFound);
    };
    articles::destroy(state.store.as_ref(), &article).await?;
    tracing::info!(article_id = article.id, "Article deleted");
    Ok(Outcome::redirect("/"))
}
