// Core traits for pluggable backends
//
// ContentStore lets the policy and lifecycle code run against:
// - In-memory content for tests and dev mode
// - PostgreSQL for production

use async_trait::async_trait;

use crate::article::Article;
use crate::error::Result;
use crate::user::User;

// ============================================================================
// ContentStore - Read-only access to articles and users
// ============================================================================

/// Read-only repository of articles and users
///
/// Implementations return `Ok(None)` for missing rows and reserve `Err` for
/// backend failures.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Get an article by id
    async fn find_article_by_id(&self, id: i64) -> Result<Option<Article>>;

    /// List all articles in the store's natural order
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// List articles flagged `is_member_only`, in the store's natural order
    async fn list_member_only_articles(&self) -> Result<Vec<Article>>;

    /// Exact-match lookup by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get a user by id
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>>;
}
