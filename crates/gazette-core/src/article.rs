// Article domain type
//
// Articles are read-only from the API's perspective. Used by both the
// storage backends and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A published article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Short teaser shown in listings
    pub preview: String,
    pub minutes_to_read: i32,
    pub date: DateTime<Utc>,
    /// Readable only by authenticated members
    pub is_member_only: bool,
}

impl Article {
    /// Build a teaser from the first 25 characters of the content, with "..."
    /// appended when anything was cut
    pub fn preview_from(content: &str) -> String {
        const PREVIEW_CHARS: usize = 25;
        let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
        if content.chars().count() > PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_content() {
        let preview = Article::preview_from("Lorem ipsum dolor sit amet, consectetur adipiscing");
        assert_eq!(preview, "Lorem ipsum dolor sit ame...");
    }

    #[test]
    fn test_preview_cuts_at_fixed_length() {
        let exact = "a".repeat(25);
        assert_eq!(Article::preview_from(&exact), exact);

        let preview = Article::preview_from("First sentence. Second sentence follows here.");
        assert_eq!(preview, "First sentence. Second se...");
    }

    #[test]
    fn test_preview_keeps_short_content() {
        assert_eq!(Article::preview_from("Short"), "Short");
    }

    #[test]
    fn test_article_serialization_field_names() {
        let article = Article {
            id: 5,
            title: "Title".to_string(),
            author: "Author".to_string(),
            content: "Body".to_string(),
            preview: "Body".to_string(),
            minutes_to_read: 3,
            date: Utc::now(),
            is_member_only: true,
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["is_member_only"], true);
        assert_eq!(value["minutes_to_read"], 3);
    }
}
