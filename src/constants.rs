// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how a preview is built: how many blocks it shows, how deep it walks,
//! how it is styled when attached to a Slack message.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Versioned Notion REST API contract this client speaks.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Base URL for the public Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Internal (undocumented) endpoint used for the public-visibility check.
///
/// The public API has no way to ask "is this page shared to the web or to
/// the whole workspace", so the check rides on the same endpoint the Notion
/// web client uses to hydrate a page.
pub const LOAD_PAGE_CHUNK_URL: &str = "https://www.notion.so/api/v3/loadPageChunk";

/// Record limit sent with the `loadPageChunk` visibility probe.
///
/// One chunk is always enough: the permission records arrive with the first
/// chunk of the page, and the probe never follows the cursor.
pub const PAGE_CHUNK_LIMIT: u32 = 30;

// ---------------------------------------------------------------------------
// Preview boundaries
// ---------------------------------------------------------------------------

/// How many blocks of a single nesting level make it into a preview.
///
/// Previews are glanceable summaries, not mirrors of the page. Anything
/// past this count is silently truncated.
pub const PREVIEW_BLOCK_COUNT: usize = 20;

/// Maximum nesting depth when recursively walking a page body.
///
/// Notion pages can nest arbitrarily deep. Each recursion level costs one
/// round-trip per block that has children, so the budget doubles as the
/// latency bound for a single link.
pub const PREVIEW_BODY_DEPTH: u8 = 3;

/// Maximum number of ancestors resolved for the breadcrumb trail.
pub const BREADCRUMB_DEPTH: u8 = 2;

/// Indent unit prefixed once per nesting level in the rendered body.
pub const INDENT_UNIT: &str = "    ";

/// Separator between breadcrumb titles in the unfurl footer.
pub const BREADCRUMB_SEPARATOR: &str = " / ";

// ---------------------------------------------------------------------------
// Unfurl styling
// ---------------------------------------------------------------------------

/// Sidebar color of the unfurl attachment.
pub const UNFURL_COLOR: &str = "#ffffff";

/// Icon rendered next to the breadcrumb footer.
pub const UNFURL_FOOTER_ICON: &str = "https://www.notion.so/images/favicon.ico";

// ---------------------------------------------------------------------------
// Slack API boundaries
// ---------------------------------------------------------------------------

/// Base URL for the Slack Web API.
pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";

/// Maximum age of an inbound event request before the signature check
/// rejects it as a possible replay.
pub const SLACK_SIGNATURE_MAX_AGE_SECS: u64 = 300;
