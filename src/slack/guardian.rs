// src/slack/guardian.rs
//! Decision-record guardian.
//!
//! In configured channels, sharing a link to a decision record whose
//! decision property is set to "Go" triggers a reminder posted as a
//! threaded reply. Like unfurling, this is best-effort per link: a page
//! that cannot be checked simply does not match.

use crate::api::NotionReader;
use crate::config::AppConfig;
use crate::model::PageObject;
use crate::slack::{LinkSharedEvent, SharedLink, SlackApiClient};
use crate::types::NotionId;
use crate::unfurl::url;

/// Select option name that marks a decision as adopted.
const DECISION_GO: &str = "Go";

/// Posts the guardian reminder when the event warrants one.
pub async fn handle_guardian(
    reader: &dyn NotionReader,
    slack: &SlackApiClient,
    config: &AppConfig,
    event: &LinkSharedEvent,
) {
    if !event_warrants_reminder(reader, config, event).await {
        return;
    }

    if let Err(e) = slack
        .post_thread_reply(&event.channel, &event.message_ts, &config.guardian_message)
        .await
    {
        log::error!("Guardian reply failed: {}", e);
    }
}

/// Whether the event happened in a watched channel and shares at least one
/// adopted decision record. Short-circuits on the first match.
pub async fn event_warrants_reminder(
    reader: &dyn NotionReader,
    config: &AppConfig,
    event: &LinkSharedEvent,
) -> bool {
    if !config.guardian_channels.contains(&event.channel) {
        return false;
    }

    for link in &event.links {
        if is_adopted_decision(reader, config, link).await {
            return true;
        }
    }
    false
}

/// Whether a shared link points at a decision record marked "Go".
///
/// A page counts as a decision record when its parent is the configured
/// decision database. Any failure along the way logs and reports false.
async fn is_adopted_decision(
    reader: &dyn NotionReader,
    config: &AppConfig,
    link: &SharedLink,
) -> bool {
    let Some(database_id) = &config.decision_database_id else {
        return false;
    };
    if !url::is_notion_domain(&link.domain) {
        return false;
    }

    let sanitized = url::sanitize_slack_link(&link.url);
    let Ok(parsed) = ::url::Url::parse(&sanitized) else {
        log::error!("Unparseable link {}", link.url);
        return false;
    };
    let Some(raw_id) = url::page_id_from_url(&parsed) else {
        log::error!("PageId not found in {}", parsed);
        return false;
    };
    let Ok(page_id) = NotionId::parse(&raw_id) else {
        log::error!("Invalid page id in {}", parsed);
        return false;
    };

    let page = match reader.retrieve_page(&page_id).await {
        Ok(PageObject::Page(page)) => page,
        Ok(PageObject::Partial { id }) => {
            log::error!("Page data not found for {}", id);
            return false;
        }
        Err(e) => {
            log::error!("Failed to retrieve page {}: {}", page_id, e);
            return false;
        }
    };
    if !page.belongs_to_database(database_id) {
        return false;
    }

    match reader
        .retrieve_property(&page_id, &config.decision_property_id)
        .await
    {
        Ok(value) => value.is_select_named(DECISION_GO),
        Err(e) => {
            log::error!("Failed to retrieve decision property of {}: {}", page_id, e);
            false
        }
    }
}
