//! Article row model and unpersisted draft.

use articles_core::article::{publish_label, short_description, ArticleFields};
use articles_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Article {
    /// `created_at` as `March 4, 2024, 3:45pm`.
    pub fn published_at(&self) -> String {
        publish_label(&self.created_at)
    }

    /// Body cut to 200 characters with a trailing ellipsis when longer.
    pub fn short_description(&self) -> String {
        short_description(&self.body)
    }

    pub fn fields(&self) -> ArticleFields {
        ArticleFields::new(&self.title, &self.author, &self.body)
    }
}

/// An article that exists only in memory, used to re-display a form with
/// the values the user submitted. Never written to storage.
///
/// `id` is set when the draft holds rejected edits to an existing article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftArticle {
    pub id: Option<DbId>,
    pub title: String,
    pub author: String,
    pub body: String,
}

impl DraftArticle {
    pub fn from_fields(fields: &ArticleFields) -> Self {
        Self {
            id: None,
            title: fields.title.clone(),
            author: fields.author.clone(),
            body: fields.body.clone(),
        }
    }

    /// Attempted values for an existing article, keeping its id.
    pub fn for_existing(id: DbId, fields: &ArticleFields) -> Self {
        Self {
            id: Some(id),
            ..Self::from_fields(fields)
        }
    }
}

impl From<&Article> for DraftArticle {
    fn from(article: &Article) -> Self {
        Self::for_existing(article.id, &article.fields())
    }
}
