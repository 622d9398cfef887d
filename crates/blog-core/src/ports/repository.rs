use async_trait::async_trait;

use crate::domain::{Post, PostInput};
use crate::error::DomainError;

/// Post store - the collection of posts and its CRUD operations.
///
/// Mutating operations take raw [`PostInput`] so that an implementation can
/// run the lookup, the validation, and the mutation as one atomic step.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a post by id.
    async fn get(&self, id: &str) -> Result<Post, DomainError>;

    /// Validate the input and append a new post.
    async fn create(&self, input: PostInput) -> Result<Post, DomainError>;

    /// Update an existing post in place.
    ///
    /// A missing id is reported before invalid input.
    async fn update(&self, id: &str, input: PostInput) -> Result<Post, DomainError>;

    /// Remove a post and return it.
    async fn delete(&self, id: &str) -> Result<Post, DomainError>;
}
