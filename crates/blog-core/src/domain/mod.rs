//! Domain entities - the core business objects.

mod input;
mod post;
pub mod timestamp;

pub use input::{PostDraft, PostInput, REQUIRED_FIELDS_MESSAGE};
pub use post::{DEFAULT_AUTHOR, Post};
