//! The persistence port handlers read and write articles through.
//!
//! [`PgArticleStore`] backs it with Postgres; [`crate::InMemoryArticleStore`]
//! backs it with a map so the HTTP layer can be exercised without a database.

use articles_core::article::ArticleFields;
use articles_core::types::DbId;
use async_trait::async_trait;

use crate::models::article::Article;
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Storage operations for articles.
///
/// Implementations return only infrastructure failures as errors. Field
/// validation happens before a write reaches the store (see
/// [`crate::articles`]).
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every article, ordered `created_at DESC, id DESC`.
    async fn find_all(&self) -> Result<Vec<Article>, sqlx::Error>;

    async fn find_by_key(&self, id: DbId) -> Result<Option<Article>, sqlx::Error>;

    /// Insert and return the row with its assigned id and timestamps.
    async fn insert(&self, fields: &ArticleFields) -> Result<Article, sqlx::Error>;

    /// Overwrite the editable fields and refresh `updated_at`.
    /// `None` if no row has this id.
    async fn update(&self, id: DbId, fields: &ArticleFields)
        -> Result<Option<Article>, sqlx::Error>;

    /// Hard delete. `false` if no row has this id.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Cheap reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`ArticleStore`] over a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn find_all(&self) -> Result<Vec<Article>, sqlx::Error> {
        ArticleRepo::list(&self.pool).await
    }

    async fn find_by_key(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, fields: &ArticleFields) -> Result<Article, sqlx::Error> {
        ArticleRepo::create(&self.pool, fields).await
    }

    async fn update(
        &self,
        id: DbId,
        fields: &ArticleFields,
    ) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::update(&self.pool, id, fields).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ArticleRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
