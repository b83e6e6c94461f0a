// src/model/mod.rs
//! Domain model for Notion objects.
//!
//! Retrieval endpoints return one of two shapes: a full object carrying
//! properties and a parent reference, or a stripped placeholder (deleted or
//! inaccessible objects). The `PageObject`/`DatabaseObject` enums make that
//! duality explicit so every consumer is forced to branch on it before
//! reading a title or walking a parent chain.

mod block;
mod property;

pub use block::{Block, BlockCommon, TextBlockContent, ToDoBlock};
pub use property::PropertyValue;

use crate::types::{plain_text, NotionId, RichTextItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A page retrieval result: either a full page or a terminal placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageObject {
    Page(Page),
    /// A reference that cannot be read as page data (deleted, or the
    /// integration lost access after the link was shared).
    Partial { id: NotionId },
}

/// A database retrieval result, with the same duality as `PageObject`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatabaseObject {
    Database(Database),
    Partial { id: NotionId },
}

/// A fully resolvable Notion page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: NotionId,
    pub parent: Parent,
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Derives the page title from its `title`-typed property.
    ///
    /// A page always has at most one title property, but its name is
    /// user-defined, so the lookup scans values rather than keys. Pages
    /// without one (some database rows) yield an empty title.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find_map(|value| match value {
                PropertyValue::Title { title } => Some(plain_text(title)),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Whether this page is a row of the given database.
    pub fn belongs_to_database(&self, database_id: &NotionId) -> bool {
        matches!(&self.parent, Parent::Database { database_id: id } if id == database_id)
    }
}

/// A fully resolvable Notion database.
///
/// Only the parent reference matters here: database titles are deliberately
/// excluded from breadcrumb trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: NotionId,
    pub parent: Parent,
    pub title: Vec<RichTextItem>,
}

/// Parent reference of a page or database.
///
/// `Workspace` and `Block` both terminate a breadcrumb walk the same way a
/// missing parent does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: NotionId },
    #[serde(rename = "database_id")]
    Database { database_id: NotionId },
    #[serde(rename = "block_id")]
    Block { block_id: NotionId },
    #[serde(rename = "workspace")]
    Workspace,
}
