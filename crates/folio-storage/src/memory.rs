// In-memory storage implementation for dev mode and tests
// Decision: Use parking_lot for thread-safe access
// Decision: The blog singleton is an Option behind one write lock, so
// fetch-or-create is atomic without any extra coordination
//
// Mirrors the PostgreSQL repository API so the site can run without a database.

use anyhow::Result;
use chrono::{DateTime, Utc};
use folio_core::DEFAULT_BLOG_TITLE;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    blog: RwLock<Option<BlogRow>>,
    articles: RwLock<HashMap<Uuid, ArticleRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ============================================
    // Blog (singleton)
    // ============================================

    pub async fn get_or_create_blog(&self) -> Result<BlogRow> {
        if let Some(row) = self.blog.read().as_ref() {
            return Ok(row.clone());
        }

        let mut blog = self.blog.write();
        let row = blog.get_or_insert_with(|| {
            tracing::info!("Created default blog settings");
            let now = Self::now();
            BlogRow {
                title: DEFAULT_BLOG_TITLE.to_string(),
                tagline: None,
                created_at: now,
                updated_at: now,
            }
        });
        Ok(row.clone())
    }

    pub async fn update_blog(&self, input: UpdateBlog) -> Result<BlogRow> {
        let now = Self::now();
        let mut blog = self.blog.write();
        let row = BlogRow {
            title: input.title,
            tagline: input.tagline,
            created_at: blog.as_ref().map_or(now, |b| b.created_at),
            updated_at: now,
        };
        *blog = Some(row.clone());
        Ok(row)
    }

    pub async fn count_blogs(&self) -> Result<i64> {
        Ok(i64::from(self.blog.read().is_some()))
    }

    // ============================================
    // Articles
    // ============================================

    pub async fn create_article(&self, input: CreateArticleRow) -> Result<ArticleRow> {
        let now = Self::now();
        let id = Uuid::now_v7();
        let row = ArticleRow {
            id,
            title: input.title,
            body: input.body,
            created_at: now,
            updated_at: now,
        };
        self.articles.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_article(&self, id: Uuid) -> Result<Option<ArticleRow>> {
        Ok(self.articles.read().get(&id).cloned())
    }

    pub async fn list_articles(&self) -> Result<Vec<ArticleRow>> {
        let mut result: Vec<_> = self.articles.read().values().cloned().collect();
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(result)
    }

    pub async fn update_article(
        &self,
        id: Uuid,
        input: UpdateArticle,
    ) -> Result<Option<ArticleRow>> {
        let mut articles = self.articles.write();
        if let Some(article) = articles.get_mut(&id) {
            article.title = input.title;
            article.body = input.body;
            article.updated_at = Self::now();
            return Ok(Some(article.clone()));
        }
        Ok(None)
    }

    pub async fn delete_article(&self, id: Uuid) -> Result<bool> {
        Ok(self.articles.write().remove(&id).is_some())
    }

    pub async fn count_articles(&self) -> Result<i64> {
        Ok(self.articles.read().len() as i64)
    }
}
