// Repository layer for PostgreSQL
// Decision: Listings are ordered by id, which is insertion order for BIGSERIAL keys

use anyhow::{Context, Result};
use sqlx::PgPool;

use super::models::*;

const ARTICLE_COLUMNS: &str = "id, author, title, content, preview, minutes_to_read, date, is_member_only, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a user, or return the existing row when the username is taken
    pub async fn upsert_user(&self, input: CreateUserRow) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            ON CONFLICT (username) DO UPDATE SET updated_at = users.updated_at
            RETURNING id, username, created_at, updated_at
            "#,
        )
        .bind(&input.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Articles
    // ============================================

    pub async fn create_article(&self, input: CreateArticleRow) -> Result<ArticleRow> {
        let sql = format!(
            r#"
            INSERT INTO articles (author, title, content, preview, minutes_to_read, is_member_only, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(&input.author)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.preview)
            .bind(input.minutes_to_read)
            .bind(input.is_member_only)
            .bind(input.user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn get_article(&self, id: i64) -> Result<Option<ArticleRow>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn list_articles(&self) -> Result<Vec<ArticleRow>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn list_member_only_articles(&self) -> Result<Vec<ArticleRow>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE is_member_only = TRUE ORDER BY id"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn count_articles(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
