// Blog settings service
// Decision: get_unique is the only way the site reads the blog, so the row is
// created lazily on first access

use anyhow::Result;
use folio_core::{Blog, BlogSettings};
use folio_storage::{StorageBackend, UpdateBlog};

pub struct BlogService {
    storage: StorageBackend,
}

impl BlogService {
    pub fn new(storage: StorageBackend) -> Self {
        Self { storage }
    }

    /// Return the one blog, creating it with default settings when absent
    pub async fn get_unique(&self) -> Result<Blog> {
        let row = self.storage.get_or_create_blog().await?;
        Ok(row.into())
    }

    pub async fn update(&self, settings: BlogSettings) -> Result<Blog> {
        let input = UpdateBlog {
            title: settings.title,
            tagline: settings.tagline,
        };
        let row = self.storage.update_blog(input).await?;
        tracing::info!(title = %row.title, "Blog settings updated");
        Ok(row.into())
    }
}
