// src/unfurl/url.rs
//! Page identifier extraction from Notion URLs.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref NOTION_DOMAIN: Regex =
        Regex::new(r"(www\.)?notion\.so").expect("notion domain regex must compile");
}

/// Whether a link's domain belongs to the Notion document service.
pub fn is_notion_domain(domain: &str) -> bool {
    NOTION_DOMAIN.is_match(domain)
}

/// Removes every literal `amp;` from a raw Slack link.
///
/// Slack sometimes delivers `&` double-escaped as `&amp;`, which breaks the
/// query-parameter addressing form. Stripping `amp;` restores the original.
pub fn sanitize_slack_link(url: &str) -> String {
    url.replace("amp;", "")
}

/// Extracts the page identifier from a Notion URL.
///
/// Two addressing schemes exist:
/// - modal view, where the id is in query parameter `p`:
///   `https://www.notion.so/example/my-title-571b...?p=5dac...`
/// - page view, where the id is the `-`-separated suffix of the last path
///   segment: `https://www.notion.so/example/my-title-571b...`
///
/// Returns `None` when no identifier can be extracted; the caller logs and
/// skips the link.
pub fn page_id_from_url(url: &Url) -> Option<String> {
    if let Some(query_id) = url
        .query_pairs()
        .find(|(key, _)| key == "p")
        .map(|(_, value)| value.into_owned())
    {
        return Some(query_id);
    }

    let last_segment = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?;
    last_segment.split('-').next_back().map(str::to_owned)
}
