use axum::extract::State;
use maud::Markup;
use std::sync::Arc;

use super::PageContext;
use crate::error::AppError;
use crate::render;
use crate::services::ArticleService;

/// GET / - All articles, newest first
pub async fn index(
    ctx: PageContext,
    State(articles): State<Arc<ArticleService>>,
) -> Result<Markup, AppError> {
    let articles = articles.list().await?;
    Ok(render::index_page(&ctx, &articles))
}
