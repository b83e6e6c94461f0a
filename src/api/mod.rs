// src/api/mod.rs
//! Notion API interaction — the ability to retrieve content from a workspace.
//!
//! This module provides a data-oriented interface to the Notion API, with
//! clear separation between I/O operations, parsing, and business logic.

pub mod client;
pub mod parser;
pub mod visibility;

use crate::error::AppError;
use crate::model::{Block, DatabaseObject, PageObject, PropertyValue};
use crate::types::NotionId;

/// The ability to retrieve content from a Notion workspace.
///
/// This is the fundamental algebra for API interaction. The walkers depend
/// on this trait, never on HTTP details, so tests substitute an in-memory
/// fake workspace.
#[async_trait::async_trait]
pub trait NotionReader: Send + Sync {
    async fn retrieve_page(&self, id: &NotionId) -> Result<PageObject, AppError>;
    async fn retrieve_database(&self, id: &NotionId) -> Result<DatabaseObject, AppError>;

    /// Lists the immediate children of a page or block.
    ///
    /// Returns the first page of results only; previews are bounded well
    /// below the API page size, so the cursor is never followed.
    async fn list_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;

    /// Retrieves a single property value by its (already URL-encoded) id.
    async fn retrieve_property(
        &self,
        page: &NotionId,
        property_id: &str,
    ) -> Result<PropertyValue, AppError>;
}

/// The ability to decide whether a page is publicly readable.
///
/// Implemented by `PageChunkClient` over the internal endpoint; tests
/// substitute a fixed answer. Implementations fail closed and never error.
#[async_trait::async_trait]
pub trait VisibilityProbe: Send + Sync {
    async fn is_page_public(&self, id: &NotionId) -> bool;
}

pub use client::NotionHttpClient;
pub use visibility::PageChunkClient;
