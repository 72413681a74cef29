// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// StorageBackend works with either PostgreSQL (production) or in-memory
// (dev mode and tests) storage behind one API.

use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Connect to PostgreSQL and apply migrations
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        db.migrate().await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    // ============================================
    // Blog (singleton)
    // ============================================

    pub async fn get_or_create_blog(&self) -> Result<BlogRow> {
        match self {
            Self::Postgres(db) => db.get_or_create_blog().await,
            Self::InMemory(db) => db.get_or_create_blog().await,
        }
    }

    pub async fn update_blog(&self, input: UpdateBlog) -> Result<BlogRow> {
        match self {
            Self::Postgres(db) => db.update_blog(input).await,
            Self::InMemory(db) => db.update_blog(input).await,
        }
    }

    pub async fn count_blogs(&self) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_blogs().await,
            Self::InMemory(db) => db.count_blogs().await,
        }
    }

    // ============================================
    // Articles
    // ============================================

    pub async fn create_article(&self, input: CreateArticleRow) -> Result<ArticleRow> {
        match self {
            Self::Postgres(db) => db.create_article(input).await,
            Self::InMemory(db) => db.create_article(input).await,
        }
    }

    pub async fn get_article(&self, id: Uuid) -> Result<Option<ArticleRow>> {
        match self {
            Self::Postgres(db) => db.get_article(id).await,
            Self::InMemory(db) => db.get_article(id).await,
        }
    }

    pub async fn list_articles(&self) -> Result<Vec<ArticleRow>> {
        match self {
            Self::Postgres(db) => db.list_articles().await,
            Self::InMemory(db) => db.list_articles().await,
        }
    }

    pub async fn update_article(
        &self,
        id: Uuid,
        input: UpdateArticle,
    ) -> Result<Option<ArticleRow>> {
        match self {
            Self::Postgres(db) => db.update_article(id, input).await,
            Self::InMemory(db) => db.update_article(id, input).await,
        }
    }

    pub async fn delete_article(&self, id: Uuid) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_article(id).await,
            Self::InMemory(db) => db.delete_article(id).await,
        }
    }

    pub async fn count_articles(&self) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_articles().await,
            Self::InMemory(db) => db.count_articles().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_dev_mode() {
        let backend = StorageBackend::in_memory();
        assert!(backend.is_dev_mode());
        assert_eq!(backend.kind(), "memory");
    }

    #[tokio::test]
    async fn test_dispatch_to_in_memory() {
        let backend = StorageBackend::in_memory();
        let blog = backend.get_or_create_blog().await.unwrap();
        assert_eq!(blog.title, "My Blog");

        backend
            .create_article(CreateArticleRow {
                title: "A".to_string(),
                body: "B".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(backend.count_articles().await.unwrap(), 1);
        assert_eq!(backend.count_blogs().await.unwrap(), 1);
    }
}
