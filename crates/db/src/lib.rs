//! Persistence layer for articles.
//!
//! - [`models`]: row structs and the unpersisted draft.
//! - [`repositories`]: SQL against a Postgres pool.
//! - [`store`]: the [`ArticleStore`] port the HTTP layer talks to.
//! - [`memory`]: an in-process [`ArticleStore`] for tests and local runs.
//! - [`articles`]: entity operations (validation + one store call each).

use sqlx::postgres::PgPoolOptions;

pub mod articles;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use articles::StoreError;
pub use memory::InMemoryArticleStore;
pub use store::{ArticleStore, PgArticleStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
