// src/slack/server.rs
//! Events API endpoint.
//!
//! One POST route receives every Slack callback. Requests are authenticated
//! with the signing-secret HMAC scheme before the body is trusted; the
//! `url_verification` handshake is answered inline, and `link_shared`
//! events are processed on a spawned task so the handler acks inside
//! Slack's delivery timeout.

use crate::api::{NotionReader, PageChunkClient};
use crate::config::AppConfig;
use crate::constants::SLACK_SIGNATURE_MAX_AGE_SECS;
use crate::slack::{guardian, Event, EventEnvelope, SlackApiClient};
use crate::unfurl;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Shared state for the event handler.
pub struct AppState {
    pub reader: Arc<dyn NotionReader>,
    pub visibility: PageChunkClient,
    pub slack: SlackApiClient,
    pub config: Arc<AppConfig>,
}

/// Builds the event-subscription router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", post(handle_event_request)).with_state(state)
}

async fn handle_event_request(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let timestamp = header_str(&headers, "x-slack-request-timestamp");
    let signature = header_str(&headers, "x-slack-signature");
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    if !verify_signature(
        &state.config.slack_signing_secret,
        timestamp,
        &body,
        signature,
        now,
    ) {
        log::warn!("Rejected request with invalid signature");
        return (StatusCode::UNAUTHORIZED, String::new());
    }

    let envelope: EventEnvelope = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("Unparseable event payload: {}", e);
            return (StatusCode::BAD_REQUEST, String::new());
        }
    };

    match envelope {
        EventEnvelope::UrlVerification { challenge } => (StatusCode::OK, challenge),
        EventEnvelope::EventCallback {
            event: Event::LinkShared(event),
        } => {
            tokio::spawn(async move {
                let unfurls =
                    unfurl::resolve_links(state.reader.as_ref(), &state.visibility, &event.links)
                        .await;

                if unfurls.is_empty() {
                    log::debug!("No unfurlable links in message {}", event.message_ts);
                } else if let Err(e) = state
                    .slack
                    .chat_unfurl(&event.channel, &event.message_ts, &unfurls)
                    .await
                {
                    log::error!("chat.unfurl failed: {}", e);
                }

                guardian::handle_guardian(
                    state.reader.as_ref(),
                    &state.slack,
                    &state.config,
                    &event,
                )
                .await;
            });
            (StatusCode::OK, String::new())
        }
        EventEnvelope::EventCallback { .. } => (StatusCode::OK, String::new()),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

/// Verifies Slack's `v0` request signature.
///
/// The signature is HMAC-SHA256 over `v0:{timestamp}:{body}` keyed with the
/// signing secret; comparison is constant-time via `Mac::verify_slice`.
/// Requests older than the replay window are rejected.
pub fn verify_signature(
    signing_secret: &str,
    timestamp: &str,
    body: &str,
    signature: &str,
    now: u64,
) -> bool {
    let Ok(ts) = timestamp.parse::<u64>() else {
        return false;
    };
    if now.abs_diff(ts) > SLACK_SIGNATURE_MAX_AGE_SECS {
        return false;
    }

    let Some(signature_hex) = signature.strip_prefix("v0=") else {
        return false;
    };
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(signing_secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("v0:{}:{}", timestamp, body).as_bytes());
    mac.verify_slice(&signature_bytes).is_ok()
}
