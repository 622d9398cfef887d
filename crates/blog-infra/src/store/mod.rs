//! Post store implementations.

mod memory;
mod seed;

pub use memory::InMemoryPostStore;
pub use seed::seed_posts;
