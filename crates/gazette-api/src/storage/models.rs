// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use gazette_core::{Article, User};
use sqlx::FromRow;

// ============================================
// Users
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUserRow {
    pub username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
        }
    }
}

// ============================================
// Articles
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i32,
    pub date: DateTime<Utc>,
    pub is_member_only: bool,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateArticleRow {
    pub author: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i32,
    pub is_member_only: bool,
    pub user_id: Option<i64>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            author: row.author,
            content: row.content,
            preview: row.preview,
            minutes_to_read: row.minutes_to_read,
            date: row.date,
            is_member_only: row.is_member_only,
        }
    }
}
