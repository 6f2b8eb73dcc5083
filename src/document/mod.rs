//! The typed document tree the renderer consumes.
//!
//! This module contains:
//! - Closed block and inline node enums plus the Document root
//! - A CommonMark adapter (`Document::from_markdown`) built on pulldown-cmark
//!
//! Trees can equally be constructed directly, which is how most renderer
//! tests build their inputs.

mod block;
mod inline;
mod markdown;

// Re-export the tree types
pub use block::{Block, Document, ListItem};
pub use inline::Inline;
