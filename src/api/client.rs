// src/api/client.rs
//! Pure HTTP client wrapper for the public Notion API.
//!
//! A thin wrapper around reqwest for making HTTP requests to the Notion
//! API. It handles authentication and basic request/response operations
//! without parsing or business logic.

use crate::constants::{NOTION_API_BASE_URL, NOTION_VERSION};
use crate::error::AppError;
use reqwest::{header, Client, Response};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", NOTION_API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionReader for NotionHttpClient {
    async fn retrieve_page(
        &self,
        id: &crate::types::NotionId,
    ) -> Result<crate::model::PageObject, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_page_response(result)
    }

    async fn retrieve_database(
        &self,
        id: &crate::types::NotionId,
    ) -> Result<crate::model::DatabaseObject, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_database_response(result)
    }

    async fn list_children(
        &self,
        parent: &crate::types::NotionId,
    ) -> Result<Vec<crate::model::Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_children_response(result)
    }

    async fn retrieve_property(
        &self,
        page: &crate::types::NotionId,
        property_id: &str,
    ) -> Result<crate::model::PropertyValue, AppError> {
        // property_id arrives already URL-encoded (e.g. "hhz%7C").
        let endpoint = format!("pages/{}/properties/{}", page.to_hyphenated(), property_id);
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_property_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
