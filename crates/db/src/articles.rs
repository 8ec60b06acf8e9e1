//! Article entity operations over an [`ArticleStore`].
//!
//! Each operation performs at most one store call. Validation failures and
//! rows that vanished between lookup and write come back as [`CoreError`]
//! values inside [`StoreError`], never as infrastructure errors.

use articles_core::article::ArticleFields;
use articles_core::error::CoreError;
use articles_core::types::DbId;

use crate::models::article::{Article, DraftArticle};
use crate::store::ArticleStore;

const ENTITY: &str = "Article";

/// Failure of an entity operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Validation or not-found, recoverable by the caller.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Parse an id taken verbatim from a request path. Anything that is not a
/// positive integer can never match a row.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}

/// Every article, newest first.
pub async fn find_all(store: &dyn ArticleStore) -> Result<Vec<Article>, StoreError> {
    Ok(store.find_all().await?)
}

/// Look up an article by its raw path id. Unparseable ids are `Ok(None)`
/// and never reach the store.
pub async fn find_by_key(
    store: &dyn ArticleStore,
    raw_id: &str,
) -> Result<Option<Article>, StoreError> {
    match parse_id(raw_id) {
        Some(id) => Ok(store.find_by_key(id).await?),
        None => Ok(None),
    }
}

/// Validate and insert a new article.
pub async fn create(
    store: &dyn ArticleStore,
    fields: &ArticleFields,
) -> Result<Article, StoreError> {
    fields.check()?;
    let article = store.insert(fields).await?;
    tracing::debug!(article_id = article.id, "Article inserted");
    Ok(article)
}

/// An unpersisted article holding the submitted values.
pub fn build(fields: &ArticleFields) -> DraftArticle {
    DraftArticle::from_fields(fields)
}

/// Validate and apply `fields` to an existing article.
///
/// On a validation failure the stored row is left untouched.
pub async fn update(
    store: &dyn ArticleStore,
    article: &Article,
    fields: &ArticleFields,
) -> Result<Article, StoreError> {
    fields.check()?;
    store
        .update(article.id, fields)
        .await?
        .ok_or_else(|| not_found(article.id))
}

/// Permanently remove an article.
pub async fn destroy(store: &dyn ArticleStore, article: &Article) -> Result<(), StoreError> {
    if store.delete(article.id).await? {
        Ok(())
    } else {
        Err(not_found(article.id))
    }
}

fn not_found(id: DbId) -> StoreError {
    StoreError::Core(CoreError::NotFound { entity: ENTITY, id })
}
