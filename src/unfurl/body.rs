// src/unfurl/body.rs
//! Recursive, bounded rendering of a page's content tree.

use crate::api::NotionReader;
use crate::constants::{INDENT_UNIT, PREVIEW_BLOCK_COUNT, PREVIEW_BODY_DEPTH};
use crate::types::NotionId;
use crate::unfurl::format::block_content;
use futures::future::{BoxFuture, FutureExt};

/// Bounds for one level of the body walk.
#[derive(Debug, Clone, Copy)]
pub struct BodyOptions {
    /// How many blocks of this level make it into the rendering.
    pub block_count: usize,
    /// Indent units prefixed to every line emitted at this level.
    pub indent: usize,
    /// How many more levels of nested children may be expanded.
    pub depth: u8,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            block_count: PREVIEW_BLOCK_COUNT,
            indent: 0,
            depth: PREVIEW_BODY_DEPTH,
        }
    }
}

impl BodyOptions {
    /// Options for walking one level deeper: same count budget, one more
    /// indent unit, one less level of depth.
    fn nested(self) -> Self {
        Self {
            block_count: self.block_count,
            indent: self.indent + 1,
            depth: self.depth - 1,
        }
    }
}

/// Renders the body of a page (or any block with children) as indented text.
///
/// Fetches the immediate children (first page of results only), formats at
/// most `block_count` of them in service order, and recurses into blocks
/// that report nested children while depth remains. A block's own line
/// always precedes its descendants' lines. A fetch failure mid-walk is
/// logged and contributes nothing; it never aborts the caller.
pub fn page_body(
    reader: &dyn NotionReader,
    id: NotionId,
    options: BodyOptions,
) -> BoxFuture<'_, String> {
    async move {
        let blocks = match reader.list_children(&id).await {
            Ok(blocks) => blocks,
            Err(e) => {
                log::error!("Failed to list children of {}: {}", id, e);
                return String::new();
            }
        };

        let mut text = String::new();
        for block in blocks.iter().take(options.block_count) {
            let content = block_content(block);
            if !content.is_empty() {
                text.push_str(&INDENT_UNIT.repeat(options.indent));
                text.push_str(&content);
                text.push('\n');
            }

            // Retrieving children content
            if block.has_children() && options.depth > 0 {
                let nested = page_body(reader, block.id().clone(), options.nested()).await;
                text.push_str(&nested);
            }
        }
        text
    }
    .boxed()
}
