// src/types/mod.rs
//! Core domain types: identifiers and rich text.

mod ids;
mod rich_text;

pub use ids::NotionId;
pub use rich_text::{plain_text, RichTextItem};

use thiserror::Error;

/// Validation failures for domain values constructed from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID: {0}")]
    InvalidId(String),
}
