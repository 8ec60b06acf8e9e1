//! Repository for the `articles` table.

use articles_core::article::ArticleFields;
use articles_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::Article;

/// Column list for articles queries.
const COLUMNS: &str = "id, title, author, body, created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article. `created_at` and `updated_at` come from the
    /// column defaults.
    pub async fn create(pool: &PgPool, input: &ArticleFields) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, author, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every article, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Overwrite title, author and body. Returns `None` if the row is gone.
    ///
    /// `updated_at` never moves backwards, even if the server clock does.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArticleFields,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $1,
                author = $2,
                body = $3,
                updated_at = GREATEST(now(), updated_at)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.body)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
