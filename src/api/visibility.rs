// src/api/visibility.rs
//! Public-visibility check over the internal `loadPageChunk` endpoint.
//!
//! The public API cannot answer "is this page readable by anyone with the
//! link", so the check issues one cookie-authenticated request against the
//! endpoint the Notion web client uses, and inspects the permission records
//! in the response. The response shape is undocumented and the heuristic is
//! brittle by construction: any transport failure, missing field or
//! malformed payload resolves to non-public. Nothing here throws.

use crate::constants::{LOAD_PAGE_CHUNK_URL, PAGE_CHUNK_LIMIT};
use crate::error::AppError;
use crate::types::NotionId;
use indexmap::IndexMap;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

/// Request body of a `loadPageChunk` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageChunkRequest {
    page: PageRef,
    limit: u32,
    cursor: Cursor,
    chunk_number: u32,
    vertical_columns: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageRef {
    id: String,
    space_id: String,
}

#[derive(Debug, Serialize)]
struct Cursor {
    stack: Vec<serde_json::Value>,
}

/// The slice of the `loadPageChunk` response the heuristic reads.
///
/// `IndexMap` keeps the block records in response order: the heuristic is
/// defined over "the first record with a non-empty permissions list", so
/// iteration order is load-bearing.
#[derive(Debug, Default, Deserialize)]
pub struct PageChunkResponse {
    #[serde(rename = "recordMap", default)]
    pub record_map: Option<RecordMap>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordMap {
    #[serde(default)]
    pub block: Option<IndexMap<String, BlockRecord>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlockRecord {
    #[serde(default)]
    pub value: Option<BlockRecordValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlockRecordValue {
    #[serde(default)]
    pub permissions: Option<Vec<Permission>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "type", default)]
    pub permission_type: Option<String>,
}

/// Client for the internal visibility probe.
#[derive(Clone)]
pub struct PageChunkClient {
    client: Client,
    space_id: String,
}

impl PageChunkClient {
    /// Creates a probe client authenticated by the Notion web cookie.
    pub fn new(cookie: &str, space_id: impl Into<String>) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::COOKIE,
            header::HeaderValue::from_str(cookie).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion cookie: {}", e))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            space_id: space_id.into(),
        })
    }

    /// Issues the single bulk-fetch request with an empty traversal cursor.
    async fn load_page_chunk(&self, id: &NotionId) -> Result<PageChunkResponse, AppError> {
        let body = PageChunkRequest {
            page: PageRef {
                id: id.to_hyphenated(),
                space_id: self.space_id.clone(),
            },
            limit: PAGE_CHUNK_LIMIT,
            cursor: Cursor { stack: vec![] },
            chunk_number: 0,
            vertical_columns: false,
        };

        log::debug!("POST {} for {}", LOAD_PAGE_CHUNK_URL, id);
        let response = self
            .client
            .post(LOAD_PAGE_CHUNK_URL)
            .json(&body)
            .send()
            .await?;
        let parsed = response.json::<PageChunkResponse>().await?;
        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl super::VisibilityProbe for PageChunkClient {
    /// Whether the page is publicly readable by anyone with the link.
    ///
    /// Fails closed: a transport error or an unparseable response is
    /// logged and reported as non-public, never surfaced as an error.
    async fn is_page_public(&self, id: &NotionId) -> bool {
        match self.load_page_chunk(id).await {
            Ok(response) => records_grant_public_access(&response),
            Err(e) => {
                log::error!("Visibility probe failed for {}: {}", id, e);
                false
            }
        }
    }
}

/// Pure visibility heuristic over the block-record mapping.
///
/// The first record (response order) carrying a non-empty permissions list
/// wins; the page is public iff that list contains an entry with role
/// `editor` scoped space-wide or to an explicit team. Person-scoped entries
/// never count, whatever their role. The winning record is not verified to
/// be the queried page's own record; that matches the behavior this check
/// has always had.
pub fn records_grant_public_access(response: &PageChunkResponse) -> bool {
    let Some(blocks) = response.record_map.as_ref().and_then(|m| m.block.as_ref()) else {
        return false;
    };

    let permissions = blocks
        .values()
        .filter_map(|record| record.value.as_ref()?.permissions.as_deref())
        .find(|permissions| !permissions.is_empty());

    let Some(permissions) = permissions else {
        return false;
    };

    permissions.iter().any(|permission| {
        permission.role.as_deref() == Some("editor")
            && matches!(
                permission.permission_type.as_deref(),
                Some("space_permission") | Some("explicit_team_permission")
            )
    })
}
