//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Only an in-memory post store exists today; everything it holds is lost
//! when the process exits.

pub mod store;

pub use store::{InMemoryPostStore, seed_posts};
