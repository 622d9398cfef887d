//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::DomainError;
use blog_core::domain::{Post, PostInput};
use blog_core::ports::PostStore;

use super::seed::seed_posts;

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Lookups are linear scans by id. Every mutation holds the write lock for
/// its whole lookup-validate-mutate sequence.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// A store holding the two seed posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn position(posts: &[Post], id: &str) -> Result<usize, DomainError> {
        posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn get(&self, id: &str) -> Result<Post, DomainError> {
        let posts = self.posts.read().await;
        let idx = Self::position(&posts, id)?;
        Ok(posts[idx].clone())
    }

    async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let post = Post::new(input.validate()?);

        let mut posts = self.posts.write().await;
        posts.push(post.clone());

        tracing::debug!(post_id = %post.id, total = posts.len(), "Post created");
        Ok(post)
    }

    async fn update(&self, id: &str, input: PostInput) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        let idx = Self::position(&posts, id)?;
        let draft = input.validate()?;

        let post = &mut posts[idx];
        post.apply(draft);

        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        let idx = Self::position(&posts, id)?;
        let removed = posts.remove(idx);

        tracing::debug!(post_id = %id, total = posts.len(), "Post deleted");
        Ok(removed)
    }
}
