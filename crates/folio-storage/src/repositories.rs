// Repository layer for PostgreSQL
// Decision: The blog singleton is pinned to id = 1 by a CHECK constraint, so
// concurrent first access can't create a second row

use anyhow::{Context, Result};
use folio_core::DEFAULT_BLOG_TITLE;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ============================================
    // Blog (singleton)
    // ============================================

    /// Return the blog row, inserting the default one when the table is empty
    pub async fn get_or_create_blog(&self) -> Result<BlogRow> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO blog (id, title, tagline)
            VALUES (1, $1, NULL)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(DEFAULT_BLOG_TITLE)
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() > 0 {
            tracing::info!("Created default blog settings");
        }

        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT title, tagline, created_at, updated_at
            FROM blog
            WHERE id = 1
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_blog(&self, input: UpdateBlog) -> Result<BlogRow> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blog (id, title, tagline)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title, tagline = EXCLUDED.tagline, updated_at = NOW()
            RETURNING title, tagline, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.tagline)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn count_blogs(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ============================================
    // Articles
    // ============================================

    pub async fn create_article(&self, input: CreateArticleRow) -> Result<ArticleRow> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            INSERT INTO articles (id, title, body)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_article(&self, id: Uuid) -> Result<Option<ArticleRow>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, body, created_at, updated_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// All articles, newest first
    pub async fn list_articles(&self) -> Result<Vec<ArticleRow>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, body, created_at, updated_at
            FROM articles
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_article(
        &self,
        id: Uuid,
        input: UpdateArticle,
    ) -> Result<Option<ArticleRow>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            UPDATE articles
            SET title = $2, body = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, body, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.body)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_article(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_articles(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
