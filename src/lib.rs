// src/lib.rs
//! notion-unfurler library — resolves shared Notion links into Slack previews.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`
//! - **Configuration** — `AppConfig`
//! - **Domain model** — `PageObject`, `Page`, `Database`, `Block`, `Parent`
//! - **Domain types** — `NotionId`, `RichTextItem`
//! - **API client** — `NotionReader`, `NotionHttpClient`, `PageChunkClient`
//! - **Resolution engine** — `resolve_links`, walkers and formatters in `unfurl`
//! - **Slack glue** — event types, `SlackApiClient`, the event server

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod slack;
pub mod types;
pub mod unfurl;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};

// --- Configuration ---
pub use crate::config::{AppConfig, CommandLineInput};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, Database, DatabaseObject, Page, PageObject, Parent, PropertyValue,
    TextBlockContent, ToDoBlock,
};

// --- Domain Types ---
pub use crate::types::{plain_text, NotionId, RichTextItem, ValidationError};

// --- API Client ---
pub use crate::api::{
    visibility::records_grant_public_access, NotionHttpClient, NotionReader, PageChunkClient,
    VisibilityProbe,
};

// --- Resolution Engine ---
pub use crate::unfurl::{
    body::{page_body, BodyOptions},
    breadcrumbs::page_breadcrumbs,
    format::{block_content, format_headings},
    resolve_links,
    url::{is_notion_domain, page_id_from_url, sanitize_slack_link},
};

// --- Slack Glue ---
pub use crate::slack::{
    guardian::{event_warrants_reminder, handle_guardian},
    server::{router, verify_signature, AppState},
    Event, EventEnvelope, LinkSharedEvent, SharedLink, SlackApiClient, Unfurl,
};
