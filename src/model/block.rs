// src/model/block.rs
use crate::types::{NotionId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph { common: $pattern, .. } => $result,
            Block::Heading1 { common: $pattern, .. } => $result,
            Block::Heading2 { common: $pattern, .. } => $result,
            Block::Heading3 { common: $pattern, .. } => $result,
            Block::ToDo { common: $pattern, .. } => $result,
            Block::BulletedListItem { common: $pattern, .. } => $result,
            Block::NumberedListItem { common: $pattern, .. } => $result,
            Block::Unsupported { common: $pattern, .. } => $result,
        }
    };
}

/// Block represents the Notion block kinds a preview knows how to render,
/// plus a catch-all for everything else.
///
/// Anything not in this set degrades to empty output rather than being
/// dropped at parse time, so the walker still sees its `has_children` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Heading1 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Heading2 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Heading3 {
        common: BlockCommon,
        content: TextBlockContent,
    },
    ToDo {
        common: BlockCommon,
        todo: ToDoBlock,
    },
    BulletedListItem {
        common: BlockCommon,
        content: TextBlockContent,
    },
    NumberedListItem {
        common: BlockCommon,
        content: TextBlockContent,
    },
    Unsupported {
        common: BlockCommon,
        block_type: String,
    },
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &NotionId {
        match_all_blocks!(self, c => &c.id)
    }

    /// Whether the service reports nested children under this block.
    pub fn has_children(&self) -> bool {
        match_all_blocks!(self, c => c.has_children)
    }

    /// Get block type name
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::ToDo { .. } => "to_do",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::Unsupported { block_type, .. } => block_type,
        }
    }
}

/// Data shared by every block variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: NotionId,
    pub has_children: bool,
}

impl BlockCommon {
    pub fn new(id: NotionId) -> Self {
        Self {
            id,
            has_children: false,
        }
    }

    pub fn with_children(id: NotionId) -> Self {
        Self {
            id,
            has_children: true,
        }
    }
}

/// Content of text-bearing blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichTextItem::new(text)],
        }
    }
}

/// To-do specific content: text plus the checked flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub rich_text: Vec<RichTextItem>,
    pub checked: bool,
}
