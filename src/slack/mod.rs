// src/slack/mod.rs
//! Slack platform glue: inbound event payloads and the outbound Web API.
//!
//! This is deliberately thin. The resolution engine in `unfurl` knows
//! nothing about Slack beyond the `Unfurl` payload it assembles; everything
//! wire-shaped lives here.

pub mod guardian;
pub mod server;

use crate::constants::{SLACK_API_BASE_URL, UNFURL_COLOR, UNFURL_FOOTER_ICON};
use crate::error::AppError;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Inbound events
// ---------------------------------------------------------------------------

/// Envelope of an Events API request.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum EventEnvelope {
    /// Endpoint ownership handshake; answered with the challenge verbatim.
    #[serde(rename = "url_verification")]
    UrlVerification { challenge: String },
    #[serde(rename = "event_callback")]
    EventCallback { event: Event },
}

/// The inner event, of which only `link_shared` is handled.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "link_shared")]
    LinkShared(LinkSharedEvent),
    #[serde(other)]
    Unsupported,
}

/// A "link(s) shared" notification.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSharedEvent {
    pub channel: String,
    pub message_ts: String,
    pub links: Vec<SharedLink>,
}

/// One link within a `link_shared` event.
#[derive(Debug, Clone, Deserialize)]
pub struct SharedLink {
    pub url: String,
    pub domain: String,
}

// ---------------------------------------------------------------------------
// Outbound payloads
// ---------------------------------------------------------------------------

/// One unfurl attachment, keyed in the batch by the original URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unfurl {
    pub title: String,
    pub text: String,
    pub title_link: String,
    pub color: String,
    pub footer: String,
    pub footer_icon: String,
    pub mrkdwn_in: Vec<String>,
}

impl Unfurl {
    /// Assembles a preview with the fixed styling fields.
    pub fn preview(
        title: String,
        text: String,
        link: impl Into<String>,
        footer: String,
    ) -> Self {
        let link = link.into();
        Self {
            title,
            text,
            title_link: link,
            color: UNFURL_COLOR.to_string(),
            footer,
            footer_icon: UNFURL_FOOTER_ICON.to_string(),
            mrkdwn_in: vec!["text".to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatUnfurlRequest<'a> {
    channel: &'a str,
    ts: &'a str,
    unfurls: &'a HashMap<String, Unfurl>,
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    thread_ts: &'a str,
    text: &'a str,
}

/// Generic Slack Web API response envelope.
#[derive(Debug, Deserialize)]
struct SlackApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// Web API client
// ---------------------------------------------------------------------------

/// A thin wrapper around reqwest Client for Slack Web API calls.
#[derive(Clone)]
pub struct SlackApiClient {
    client: Client,
}

impl SlackApiClient {
    /// Creates a client authenticated with the bot token.
    pub fn new(bot_token: &str) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        let auth_header = format!("Bearer {}", bot_token);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Slack token format: {}", e))
            })?,
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }

    /// Attaches resolved previews to the message that shared the links.
    pub async fn chat_unfurl(
        &self,
        channel: &str,
        message_ts: &str,
        unfurls: &HashMap<String, Unfurl>,
    ) -> Result<(), AppError> {
        self.post(
            "chat.unfurl",
            &ChatUnfurlRequest {
                channel,
                ts: message_ts,
                unfurls,
            },
        )
        .await
    }

    /// Posts a free-text reply in the message's thread.
    pub async fn post_thread_reply(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), AppError> {
        self.post(
            "chat.postMessage",
            &PostMessageRequest {
                channel,
                thread_ts,
                text,
            },
        )
        .await
    }

    async fn post<T: Serialize>(&self, method: &str, body: &T) -> Result<(), AppError> {
        let url = format!("{}/{}", SLACK_API_BASE_URL, method);
        log::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        let parsed = response.json::<SlackApiResponse>().await?;
        if !parsed.ok {
            return Err(AppError::SlackService(format!(
                "{} failed: {}",
                method,
                parsed.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }
        Ok(())
    }
}
