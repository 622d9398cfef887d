use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::input::PostDraft;
use super::timestamp;

/// Author recorded when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from validated fields, with a fresh id and timestamps.
    pub fn new(draft: PostDraft) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content, and the author when one was supplied.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        if let Some(author) = draft.author {
            self.author = author;
        }
        // updated_at must not fall behind created_at if the wall clock steps back
        self.updated_at = timestamp::now().max(self.created_at);
    }
}
