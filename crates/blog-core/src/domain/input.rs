use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Message returned whenever a required post field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// Raw post fields as submitted by a client, before validation.
///
/// Absent fields and empty strings are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Post fields that passed validation.
///
/// `title` and `content` are guaranteed non-empty. `author` is `None` when the
/// client did not supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Check the required fields and produce a [`PostDraft`].
    pub fn validate(self) -> Result<PostDraft, DomainError> {
        match (non_empty(self.title), non_empty(self.content)) {
            (Some(title), Some(content)) => Ok(PostDraft {
                title,
                content,
                author: non_empty(self.author),
            }),
            _ => Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
