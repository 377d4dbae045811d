// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// StorageBackend wraps either PostgreSQL (production) or the in-memory
// content store (dev mode and tests) and implements the core ContentStore
// trait over both.

use anyhow::Result;
use async_trait::async_trait;
use gazette_core::{Article, ContentStore, InMemoryContentStore, User};
use std::sync::Arc;

use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory store (dev mode)
    InMemory(Arc<InMemoryContentStore>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryContentStore::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    /// Short name for health reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }
}

#[async_trait]
impl ContentStore for StorageBackend {
    async fn find_article_by_id(&self, id: i64) -> gazette_core::Result<Option<Article>> {
        match self {
            Self::Postgres(db) => Ok(db.get_article(id).await?.map(Article::from)),
            Self::InMemory(store) => store.find_article_by_id(id).await,
        }
    }

    async fn list_articles(&self) -> gazette_core::Result<Vec<Article>> {
        match self {
            Self::Postgres(db) => {
                let rows = db.list_articles().await?;
                Ok(rows.into_iter().map(Article::from).collect())
            }
            Self::InMemory(store) => store.list_articles().await,
        }
    }

    async fn list_member_only_articles(&self) -> gazette_core::Result<Vec<Article>> {
        match self {
            Self::Postgres(db) => {
                let rows = db.list_member_only_articles().await?;
                Ok(rows.into_iter().map(Article::from).collect())
            }
            Self::InMemory(store) => store.list_member_only_articles().await,
        }
    }

    async fn find_user_by_username(&self, username: &str) -> gazette_core::Result<Option<User>> {
        match self {
            Self::Postgres(db) => Ok(db.get_user_by_username(username).await?.map(User::from)),
            Self::InMemory(store) => store.find_user_by_username(username).await,
        }
    }

    async fn find_user_by_id(&self, id: i64) -> gazette_core::Result<Option<User>> {
        match self {
            Self::Postgres(db) => Ok(db.get_user(id).await?.map(User::from)),
            Self::InMemory(store) => store.find_user_by_id(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_backend_dispatch() {
        let backend = StorageBackend::in_memory();
        assert!(backend.is_dev_mode());
        assert_eq!(backend.kind(), "memory");

        if let StorageBackend::InMemory(store) = &backend {
            store
                .add_user(User {
                    id: 3,
                    username: "carol".to_string(),
                })
                .await;
        }

        let user = backend.find_user_by_username("carol").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some(3));
        assert!(backend.list_articles().await.unwrap().is_empty());
    }
}
