//! Server-rendered HTML views.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Names end in `.html` so tera autoescapes every interpolated value.

use articles_core::error::FieldError;
use articles_core::types::DbId;
use articles_db::models::article::{Article, DraftArticle};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("articles/_form.html", include_str!("../templates/articles/_form.html")),
    ("articles/index.html", include_str!("../templates/articles/index.html")),
    ("articles/new.html", include_str!("../templates/articles/new.html")),
    ("articles/edit.html", include_str!("../templates/articles/edit.html")),
    ("articles/show.html", include_str!("../templates/articles/show.html")),
    ("articles/delete.html", include_str!("../templates/articles/delete.html")),
];

/// The named pages the article handlers can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Listing,
    NewForm,
    EditForm,
    Detail,
    DeleteConfirmation,
}

impl View {
    pub fn template(self) -> &'static str {
        match self {
            View::Listing => "articles/index.html",
            View::NewForm => "articles/new.html",
            View::EditForm => "articles/edit.html",
            View::Detail => "articles/show.html",
            View::DeleteConfirmation => "articles/delete.html",
        }
    }
}

/// An article as templates see it, with the derived labels precomputed.
#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub body: String,
    pub published_at: String,
    pub short_description: String,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            author: article.author.clone(),
            body: article.body.clone(),
            published_at: article.published_at(),
            short_description: article.short_description(),
        }
    }
}

pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parse and register every built-in template.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: View, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(view.template(), context)
    }

    pub fn listing(&self, articles: &[Article]) -> Result<String, tera::Error> {
        let articles: Vec<ArticleView> = articles.iter().map(ArticleView::from).collect();
        let mut ctx = Context::new();
        ctx.insert("title", "Articles");
        ctx.insert("articles", &articles);
        self.render(View::Listing, &ctx)
    }

    pub fn new_form(
        &self,
        draft: &DraftArticle,
        errors: &[FieldError],
    ) -> Result<String, tera::Error> {
        self.render(View::NewForm, &form_context("New Article", draft, errors))
    }

    pub fn edit_form(
        &self,
        draft: &DraftArticle,
        errors: &[FieldError],
    ) -> Result<String, tera::Error> {
        self.render(View::EditForm, &form_context("Edit Article", draft, errors))
    }

    pub fn detail(&self, article: &Article) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("title", &article.title);
        ctx.insert("article", &ArticleView::from(article));
        self.render(View::Detail, &ctx)
    }

    pub fn delete_confirmation(&self, article: &Article) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("title", "Delete Article");
        ctx.insert("article", &ArticleView::from(article));
        self.render(View::DeleteConfirmation, &ctx)
    }
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}

fn form_context(title: &str, draft: &DraftArticle, errors: &[FieldError]) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx.insert("article", draft);
    ctx.insert("errors", errors);
    ctx
}

#[cfg(test)]
mod tests {
    use articles_core::article::ArticleFields;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn article(id: DbId, title: &str, body: &str) -> Article {
        let ts = Utc.with_ymd_and_hms(2024, 3, 4, 15, 45, 0).unwrap();
        Article {
            id,
            title: title.into(),
            author: "Ada".into(),
            body: body.into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn all_templates_parse() {
        Views::new().unwrap();
    }

    #[test]
    fn listing_shows_publish_label_and_links() {
        let views = Views::new().unwrap();
        let html = views.listing(&[article(3, "Hello", "World")]).unwrap();
        assert!(html.contains("March 4, 2024, 3:45pm"));
        assert!(html.contains("href=\"/3\""));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn listing_uses_short_description() {
        let views = Views::new().unwrap();
        let body = format!("{}TAIL", "x".repeat(200));
        let html = views.listing(&[article(1, "Long", &body)]).unwrap();
        assert!(!html.contains("TAIL"));
        assert!(html.contains("..."));
    }

    #[test]
    fn empty_listing_renders() {
        let views = Views::new().unwrap();
        let html = views.listing(&[]).unwrap();
        assert!(html.contains("No articles yet"));
    }

    #[test]
    fn user_text_is_escaped() {
        let views = Views::new().unwrap();
        let html = views
            .detail(&article(1, "<script>alert(1)</script>", "a & b"))
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn new_form_redisplays_values_and_errors() {
        let views = Views::new().unwrap();
        let draft = DraftArticle::from_fields(&ArticleFields::new("", "Grace", "Kept body"));
        let errors = [FieldError::new("title", "Title must not be empty")];
        let html = views.new_form(&draft, &errors).unwrap();
        assert!(html.contains("Title must not be empty"));
        assert!(html.contains("value=\"Grace\""));
        assert!(html.contains("Kept body"));
        assert!(html.contains("action=\"/\""));
    }

    #[test]
    fn edit_form_posts_back_to_the_article() {
        let views = Views::new().unwrap();
        let draft = DraftArticle::from(&article(9, "Nine", "Body"));
        let html = views.edit_form(&draft, &[]).unwrap();
        assert!(html.contains("action=\"/9/edit\""));
        assert!(html.contains("value=\"Nine\""));
    }

    #[test]
    fn delete_confirmation_posts_to_delete_path() {
        let views = Views::new().unwrap();
        let html = views.delete_confirmation(&article(4, "Four", "")).unwrap();
        assert!(html.contains("action=\"/4/delete\""));
        assert!(html.contains("Four"));
    }
}
