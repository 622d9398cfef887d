//! # Blog Core
//!
//! The domain layer of the blog API.
//! Posts, their validation rules, and the storage port live here; nothing in
//! this crate knows about HTTP or any concrete store.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
