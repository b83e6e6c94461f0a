// src/types/rich_text.rs
use serde::{Deserialize, Serialize};

/// One span of rich text as returned by the Notion API.
///
/// Previews render plain text only, so annotations, links and mention
/// payloads are not modeled. `plain_text` is always present on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub plain_text: String,
}

impl RichTextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
        }
    }
}

/// Concatenates the plain text of a run of rich text spans.
pub fn plain_text(items: &[RichTextItem]) -> String {
    items
        .iter()
        .map(|item| item.plain_text.as_str())
        .collect::<Vec<_>>()
        .join("")
}
