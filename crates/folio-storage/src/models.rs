// Database models (internal, may differ from domain types)

use chrono::{DateTime, Utc};
use folio_core::{Article, Blog};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Blog (singleton row)
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct BlogRow {
    pub title: String,
    pub tagline: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the blog settings
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub title: String,
    pub tagline: Option<String>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog {
            title: row.title,
            tagline: row.tagline,
        }
    }
}

// ============================================
// Articles
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateArticleRow {
    pub title: String,
    pub body: String,
}

/// Full replacement of an article's content; `created_at` never changes
#[derive(Debug, Clone)]
pub struct UpdateArticle {
    pub title: String,
    pub body: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
