// src/unfurl/mod.rs
//! The document-tree resolution engine.
//!
//! Given a shared URL this module decides public visibility, resolves the
//! page's ancestor chain into a breadcrumb trail, walks its content tree
//! into a bounded text rendering, and assembles the Slack unfurl payload.
//! Every link is resolved best-effort: failures are logged and skipped,
//! never allowed to abort the batch.

pub mod body;
pub mod breadcrumbs;
pub mod format;
pub mod url;

use crate::api::{NotionReader, VisibilityProbe};
use crate::constants::BREADCRUMB_SEPARATOR;
use crate::slack::{SharedLink, Unfurl};
use crate::types::NotionId;
use std::collections::HashMap;

use body::BodyOptions;
use breadcrumbs::page_breadcrumbs;
use format::format_headings;

/// Resolves a batch of shared links into unfurl payloads.
///
/// The returned map is keyed by the exact original URL string: Slack
/// matches previews to links bit-for-bit, so the key must never be the
/// sanitized form.
pub async fn resolve_links(
    reader: &dyn NotionReader,
    visibility: &dyn VisibilityProbe,
    links: &[SharedLink],
) -> HashMap<String, Unfurl> {
    let mut unfurls = HashMap::new();

    for link in links {
        log::debug!("handling {}", link.url);
        if !url::is_notion_domain(&link.domain) {
            continue;
        }

        let Some(unfurl) = resolve_link(reader, visibility, &link.url).await else {
            continue;
        };
        unfurls.insert(link.url.clone(), unfurl);
    }

    unfurls
}

/// Resolves one shared URL into a preview, or `None` when the link should
/// be skipped (unparseable, non-public, or unresolvable).
async fn resolve_link(
    reader: &dyn NotionReader,
    visibility: &dyn VisibilityProbe,
    original_url: &str,
) -> Option<Unfurl> {
    let sanitized = url::sanitize_slack_link(original_url);
    let parsed = match ::url::Url::parse(&sanitized) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Unparseable link {}: {}", original_url, e);
            return None;
        }
    };

    let Some(raw_id) = url::page_id_from_url(&parsed) else {
        log::error!("PageId not found in {}", parsed);
        return None;
    };
    let page_id = match NotionId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            log::error!("Invalid page id in {}: {}", parsed, e);
            return None;
        }
    };

    if !visibility.is_page_public(&page_id).await {
        log::info!("Page is not public: {}", parsed);
        return None;
    }

    // Title+breadcrumbs and the body walk touch disjoint data and are
    // resolved concurrently.
    let (page_data, body) = tokio::join!(
        resolve_page_data(reader, &page_id),
        body::page_body(reader, page_id.clone(), BodyOptions::default()),
    );
    let (title, trail) = page_data;

    Some(Unfurl::preview(
        title,
        format_headings(&body),
        original_url,
        trail.join(BREADCRUMB_SEPARATOR),
    ))
}

/// Fetches the page once and derives both its title and breadcrumb trail.
async fn resolve_page_data(reader: &dyn NotionReader, id: &NotionId) -> (String, Vec<String>) {
    let page = match reader.retrieve_page(id).await {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to retrieve page {}: {}", id, e);
            return (String::new(), Vec::new());
        }
    };

    let title = match &page {
        crate::model::PageObject::Page(p) => p.title(),
        crate::model::PageObject::Partial { .. } => String::new(),
    };
    let trail = page_breadcrumbs(reader, page, crate::constants::BREADCRUMB_DEPTH).await;
    (title, trail)
}
