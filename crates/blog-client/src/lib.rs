//! # Blog Client
//!
//! Async client for the blog API, for frontends and tooling.
//! Every call unwraps the response envelope into a `Result`.

mod client;
mod error;

pub use client::{BlogClient, DEFAULT_API_URL, LISTING_EXCERPT_CHARS};
pub use error::ClientError;
