use std::sync::Arc;

use articles_db::ArticleStore;

use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Article persistence (Postgres in production, in-memory in tests).
    pub store: Arc<dyn ArticleStore>,
    /// Compiled HTML templates.
    pub views: Arc<Views>,
}
