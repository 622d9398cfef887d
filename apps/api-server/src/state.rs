//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the in-memory store.
    pub fn new(config: &AppConfig) -> Self {
        let store = if config.seed_posts {
            InMemoryPostStore::seeded()
        } else {
            tracing::info!("Seeding disabled - starting with an empty post store");
            InMemoryPostStore::new()
        };

        tracing::info!("Application state initialized");

        Self::with_store(Arc::new(store))
    }

    /// Build the state around an existing store.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}
