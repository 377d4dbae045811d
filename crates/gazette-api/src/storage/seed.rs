// Sample content for dev mode and fresh databases
// Decision: Seed only when the articles table is empty so restarts are idempotent
// Decision: Sample users are upserted, so pre-existing accounts are reused

use anyhow::Result;
use chrono::{Duration, Utc};
use gazette_core::{Article, InMemoryContentStore, User};

use super::models::{CreateArticleRow, CreateUserRow};
use super::repositories::Database;

const USERNAMES: &[&str] = &["alice", "bob", "carol", "dave"];

/// (author, title, content, minutes_to_read, is_member_only)
const ARTICLES: &[(&str, &str, &str, i32, bool)] = &[
    (
        "Ada Byron",
        "Reading on the train",
        "Commuters read more long-form writing than any other group we surveyed.",
        4,
        false,
    ),
    (
        "Grace Hopper",
        "The cost of a nanosecond",
        "A nanosecond is about eleven and three quarter inches of wire.",
        3,
        false,
    ),
    (
        "Edsger Dijkstra",
        "Members: notes on structured writing",
        "Structure is what lets a reader keep their place across a long argument.",
        9,
        true,
    ),
    (
        "Barbara Liskov",
        "Substitution in everyday life",
        "If it looks like a kettle and boils like a kettle, you can make tea with it.",
        5,
        false,
    ),
    (
        "Ken Thompson",
        "Small tools, sharp edges",
        "Programs that do one thing well compose into systems that do many things well.",
        6,
        false,
    ),
    (
        "Frances Allen",
        "Members: optimizing the newsroom",
        "Most of the time spent publishing an article is spent waiting for someone.",
        12,
        true,
    ),
];

/// Users in the order they are seeded; ids start at 1
pub fn sample_users() -> Vec<User> {
    USERNAMES
        .iter()
        .enumerate()
        .map(|(i, username)| User {
            id: i as i64 + 1,
            username: username.to_string(),
        })
        .collect()
}

/// Articles in the order they are seeded; ids start at 1
pub fn sample_articles() -> Vec<Article> {
    let now = Utc::now();
    ARTICLES
        .iter()
        .enumerate()
        .map(
            |(i, (author, title, content, minutes_to_read, is_member_only))| Article {
                id: i as i64 + 1,
                title: title.to_string(),
                author: author.to_string(),
                content: content.to_string(),
                preview: Article::preview_from(content),
                minutes_to_read: *minutes_to_read,
                date: now - Duration::days((ARTICLES.len() - i) as i64),
                is_member_only: *is_member_only,
            },
        )
        .collect()
}

/// Populate the in-memory store
pub async fn seed_in_memory(store: &InMemoryContentStore) {
    store.seed(sample_articles(), sample_users()).await;
    tracing::info!(
        articles = ARTICLES.len(),
        users = USERNAMES.len(),
        "Seeded in-memory content"
    );
}

/// Populate an empty PostgreSQL database; returns whether anything was written
pub async fn seed_postgres(db: &Database) -> Result<bool> {
    if db.count_articles().await? > 0 {
        tracing::info!("Database already has articles, skipping seed");
        return Ok(false);
    }

    let mut author_ids = Vec::new();
    for user in sample_users() {
        let row = db
            .upsert_user(CreateUserRow {
                username: user.username,
            })
            .await?;
        author_ids.push(row.id);
    }

    for (i, article) in sample_articles().into_iter().enumerate() {
        db.create_article(CreateArticleRow {
            author: article.author,
            title: article.title,
            content: article.content,
            preview: article.preview,
            minutes_to_read: article.minutes_to_read,
            is_member_only: article.is_member_only,
            user_id: author_ids.get(i % author_ids.len().max(1)).copied(),
        })
        .await?;
    }

    tracing::info!(
        articles = ARTICLES.len(),
        users = USERNAMES.len(),
        "Seeded database content"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::ContentStore;

    #[test]
    fn test_sample_content_shape() {
        let articles = sample_articles();
        assert_eq!(articles.len(), ARTICLES.len());
        assert!(articles.iter().any(|a| a.is_member_only));
        assert!(articles.iter().any(|a| !a.is_member_only));

        // Article 5 is public; the metering scenarios rely on it
        let fifth = articles.iter().find(|a| a.id == 5).unwrap();
        assert!(!fifth.is_member_only);
    }

    #[test]
    fn test_sample_users_include_alice() {
        let users = sample_users();
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].username, "alice");
    }

    #[tokio::test]
    async fn test_seed_in_memory() {
        let store = InMemoryContentStore::new();
        seed_in_memory(&store).await;

        assert_eq!(store.article_count().await, ARTICLES.len());
        let members = store.list_member_only_articles().await.unwrap();
        assert_eq!(members.len(), 2);
    }
}
