// src/api/parser.rs
//! Response parsing from raw JSON into the domain model.
//!
//! Retrieval endpoints answer with one of three shapes: a full object, a
//! partial placeholder (deleted or inaccessible objects come back without
//! `properties`/`parent`), or an error envelope. Parsing never panics on a
//! missing field: partial objects map to the `Partial` duality variants and
//! unknown block kinds map to `Block::Unsupported`.

use super::client::ApiResponse;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{
    Block, BlockCommon, Database, DatabaseObject, Page, PageObject, PropertyValue,
    TextBlockContent, ToDoBlock,
};
use crate::types::{NotionId, RichTextItem};
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;

/// Error envelope returned by the Notion API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct NotionError {
    code: String,
    message: String,
}

/// Wire shape of a page/database retrieval response.
///
/// `parent` and `properties` are optional on purpose: their absence is the
/// signal that the object is a terminal placeholder.
#[derive(Debug, Deserialize)]
struct RawObject {
    id: NotionId,
    parent: Option<crate::model::Parent>,
    properties: Option<HashMap<String, RawPropertyValue>>,
    #[serde(default)]
    title: Vec<RichTextItem>,
}

/// Wire shape of a property value or a `property_item` response.
///
/// The payload key is named after the `type` tag, so every known payload is
/// an optional field and the tag decides which one is read.
#[derive(Debug, Deserialize)]
struct RawPropertyValue {
    #[serde(rename = "type")]
    property_type: Option<String>,
    title: Option<Vec<RichTextItem>>,
    select: Option<RawSelectOption>,
}

#[derive(Debug, Deserialize)]
struct RawSelectOption {
    name: Option<String>,
}

impl RawPropertyValue {
    fn into_domain(self) -> PropertyValue {
        match self.property_type.as_deref() {
            Some("title") => PropertyValue::Title {
                title: self.title.unwrap_or_default(),
            },
            Some("select") => PropertyValue::Select {
                name: self.select.and_then(|s| s.name),
            },
            other => PropertyValue::Other {
                property_type: other.unwrap_or("unknown").to_string(),
            },
        }
    }
}

/// Wire shape of a block in a children listing.
#[derive(Debug, Deserialize)]
struct RawBlock {
    id: NotionId,
    #[serde(default)]
    has_children: bool,
    #[serde(rename = "type")]
    block_type: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBlockContent {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    checked: bool,
}

#[derive(Debug, Deserialize)]
struct RawChildrenResponse {
    #[serde(default)]
    results: Vec<RawBlock>,
}

impl RawBlock {
    fn into_domain(self) -> Block {
        let common = BlockCommon {
            id: self.id,
            has_children: self.has_children,
        };

        // A block lacking a type tag altogether is carried as unsupported.
        let Some(block_type) = self.block_type else {
            return Block::Unsupported {
                common,
                block_type: "unknown".to_string(),
            };
        };

        // The type-specific payload sits under a key named after the tag.
        // Missing or malformed payloads degrade to empty content.
        let content: RawBlockContent = self
            .payload
            .get(&block_type)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        let text = TextBlockContent {
            rich_text: content.rich_text.clone(),
        };

        match block_type.as_str() {
            "paragraph" => Block::Paragraph {
                common,
                content: text,
            },
            "heading_1" => Block::Heading1 {
                common,
                content: text,
            },
            "heading_2" => Block::Heading2 {
                common,
                content: text,
            },
            "heading_3" => Block::Heading3 {
                common,
                content: text,
            },
            "to_do" => Block::ToDo {
                common,
                todo: ToDoBlock {
                    rich_text: content.rich_text,
                    checked: content.checked,
                },
            },
            "bulleted_list_item" => Block::BulletedListItem {
                common,
                content: text,
            },
            "numbered_list_item" => Block::NumberedListItem {
                common,
                content: text,
            },
            _ => Block::Unsupported { common, block_type },
        }
    }
}

/// Parses a successful body, or maps an error envelope into `AppError`.
fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", result.url, e);
            AppError::MalformedResponse(e.to_string())
        })
    } else {
        Err(parse_error_response(
            &result.data,
            result.status,
            &result.url,
        ))
    }
}

fn parse_error_response(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

/// Parses a page retrieval response into the resolvable/terminal duality.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<PageObject, AppError> {
    let raw: RawObject = parse_api_response(result)?;
    match (raw.parent, raw.properties) {
        (Some(parent), Some(properties)) => Ok(PageObject::Page(Page {
            id: raw.id,
            parent,
            properties: properties
                .into_iter()
                .map(|(name, value)| (name, value.into_domain()))
                .collect(),
        })),
        _ => Ok(PageObject::Partial { id: raw.id }),
    }
}

/// Parses a database retrieval response into the resolvable/terminal duality.
pub fn parse_database_response(result: ApiResponse<String>) -> Result<DatabaseObject, AppError> {
    let raw: RawObject = parse_api_response(result)?;
    match raw.parent {
        Some(parent) => Ok(DatabaseObject::Database(Database {
            id: raw.id,
            parent,
            title: raw.title,
        })),
        None => Ok(DatabaseObject::Partial { id: raw.id }),
    }
}

/// Parses a block-children listing (first page of results).
pub fn parse_children_response(result: ApiResponse<String>) -> Result<Vec<Block>, AppError> {
    let raw: RawChildrenResponse = parse_api_response(result)?;
    Ok(raw.results.into_iter().map(RawBlock::into_domain).collect())
}

/// Parses a single `property_item` response.
pub fn parse_property_response(result: ApiResponse<String>) -> Result<PropertyValue, AppError> {
    let raw: RawPropertyValue = parse_api_response(result)?;
    Ok(raw.into_domain())
}
