// Article service for business logic

use anyhow::Result;
use folio_core::{Article, ArticleDraft};
use folio_storage::{CreateArticleRow, StorageBackend, UpdateArticle};
use uuid::Uuid;

pub struct ArticleService {
    storage: StorageBackend,
}

impl ArticleService {
    pub fn new(storage: StorageBackend) -> Self {
        Self { storage }
    }

    /// All articles, newest first
    pub async fn list(&self) -> Result<Vec<Article>> {
        let rows = self.storage.list_articles().await?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Article>> {
        let row = self.storage.get_article(id).await?;
        Ok(row.map(Article::from))
    }

    pub async fn create(&self, draft: ArticleDraft) -> Result<Article> {
        let input = CreateArticleRow {
            title: draft.title,
            body: draft.body,
        };
        let row = self.storage.create_article(input).await?;
        tracing::info!(article_id = %row.id, title = %row.title, "Article created");
        Ok(row.into())
    }

    pub async fn update(&self, id: Uuid, draft: ArticleDraft) -> Result<Option<Article>> {
        let input = UpdateArticle {
            title: draft.title,
            body: draft.body,
        };
        let row = self.storage.update_article(id, input).await?;
        if let Some(row) = &row {
            tracing::info!(article_id = %row.id, "Article updated");
        }
        Ok(row.map(Article::from))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.storage.delete_article(id).await?;
        if deleted {
            tracing::info!(article_id = %id, "Article deleted");
        }
        Ok(deleted)
    }
}
