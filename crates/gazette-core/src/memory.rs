// In-memory content store for dev mode and testing
//
// Keeps articles and users in insertion order so listings match what a
// caller seeded. All data is lost on restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::article::Article;
use crate::error::Result;
use crate::traits::ContentStore;
use crate::user::User;

// ============================================================================
// InMemoryContentStore - Articles and users in memory
// ============================================================================

/// In-memory content store
#[derive(Debug, Default, Clone)]
pub struct InMemoryContentStore {
    articles: Arc<RwLock<Vec<Article>>>,
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with articles and users
    pub async fn seed(&self, articles: Vec<Article>, users: Vec<User>) {
        self.articles.write().await.extend(articles);
        self.users.write().await.extend(users);
    }

    /// Add an article, replacing any article with the same id
    pub async fn add_article(&self, article: Article) {
        let mut articles = self.articles.write().await;
        match articles.iter_mut().find(|a| a.id == article.id) {
            Some(existing) => *existing = article,
            None => articles.push(article),
        }
    }

    /// Add a user, replacing any user with the same id
    pub async fn add_user(&self, user: User) {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
    }

    /// Remove a user (simulates an account disappearing under a live session)
    pub async fn remove_user(&self, id: i64) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }

    pub async fn article_count(&self) -> usize {
        self.articles.read().await.len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find_article_by_id(&self, id: i64) -> Result<Option<Article>> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn list_member_only_articles(&self) -> Result<Vec<Article>> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .filter(|a| a.is_member_only)
            .cloned()
            .collect())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }
}
