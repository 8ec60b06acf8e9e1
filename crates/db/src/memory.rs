//! In-process [`ArticleStore`] backed by a `BTreeMap`.
//!
//! Mirrors the Postgres store's ordering and timestamp rules. Every port call
//! is recorded by name so tests can assert which persistence calls a request
//! made.

use std::collections::BTreeMap;
use std::sync::Mutex;

use articles_core::article::ArticleFields;
use articles_core::types::DbId;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::article::Article;
use crate::store::ArticleStore;

#[derive(Debug, Default)]
struct Rows {
    last_id: DbId,
    by_id: BTreeMap<DbId, Article>,
}

#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    rows: RwLock<Rows>,
    calls: Mutex<Vec<&'static str>>,
    failing: bool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the connection pool were exhausted.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Names of the port methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn record(&self, call: &'static str) -> Result<(), sqlx::Error> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn find_all(&self) -> Result<Vec<Article>, sqlx::Error> {
        self.record("find_all")?;
        let rows = self.rows.read().await;
        let mut articles: Vec<Article> = rows.by_id.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(articles)
    }

    async fn find_by_key(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        self.record("find_by_key")?;
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, fields: &ArticleFields) -> Result<Article, sqlx::Error> {
        self.record("insert")?;
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let now = Utc::now();
        let article = Article {
            id: rows.last_id,
            title: fields.title.clone(),
            author: fields.author.clone(),
            body: fields.body.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.by_id.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update(
        &self,
        id: DbId,
        fields: &ArticleFields,
    ) -> Result<Option<Article>, sqlx::Error> {
        self.record("update")?;
        let mut rows = self.rows.write().await;
        let Some(article) = rows.by_id.get_mut(&id) else {
            return Ok(None);
        };
        article.title = fields.title.clone();
        article.author = fields.author.clone();
        article.body = fields.body.clone();
        article.updated_at = article.updated_at.max(Utc::now());
        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.record("delete")?;
        Ok(self.rows.write().await.by_id.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.record("ping")
    }
}
