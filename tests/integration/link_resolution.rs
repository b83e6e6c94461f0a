// tests/integration/link_resolution.rs
//! End-to-end link resolution over a fake workspace.

use crate::common::{test_id, FakeWorkspace, FixedVisibility};
use notion_unfurler::{
    resolve_links, Block, BlockCommon, NotionId, Page, PageObject, Parent, PropertyValue,
    RichTextItem, SharedLink, TextBlockContent,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

const PAGE_HEX: &str = "571bb99b29e040eb8a46c2f9b7d138af";

fn shared(url: &str) -> SharedLink {
    SharedLink {
        url: url.to_string(),
        domain: "notion.so".to_string(),
    }
}

fn titled_page(id: &NotionId, title: &str, parent: Parent) -> PageObject {
    let mut properties = HashMap::new();
    properties.insert(
        "title".to_string(),
        PropertyValue::Title {
            title: vec![RichTextItem::new(title)],
        },
    );
    PageObject::Page(Page {
        id: id.clone(),
        parent,
        properties,
    })
}

fn workspace_with_content() -> FakeWorkspace {
    let page_id = NotionId::parse(PAGE_HEX).unwrap();
    let parent_id = test_id("a");
    FakeWorkspace::new()
        .with_page(titled_page(
            &page_id,
            "Release Notes",
            Parent::Page {
                page_id: parent_id.clone(),
            },
        ))
        .with_page(titled_page(&parent_id, "Engineering", Parent::Workspace))
        .with_children(
            &page_id,
            vec![
                Block::Heading1 {
                    common: BlockCommon::new(test_id("b1")),
                    content: TextBlockContent::from_text("Hello"),
                },
                Block::Paragraph {
                    common: BlockCommon::new(test_id("b2")),
                    content: TextBlockContent::from_text("Body text"),
                },
            ],
        )
}

#[tokio::test]
async fn public_page_unfurls_with_title_body_and_breadcrumbs() {
    let workspace = workspace_with_content();
    let url = format!("https://www.notion.so/example/release-notes-{}", PAGE_HEX);

    let unfurls = resolve_links(&workspace, &FixedVisibility(true), &[shared(&url)]).await;

    assert_eq!(unfurls.len(), 1);
    let unfurl = &unfurls[&url];
    assert_eq!(unfurl.title, "Release Notes");
    assert_eq!(unfurl.text, "*Hello*\nBody text\n");
    assert_eq!(unfurl.footer, "Engineering / Release Notes");
    assert_eq!(unfurl.title_link, url);
}

#[tokio::test]
async fn non_public_page_produces_zero_preview_entries() {
    let workspace = workspace_with_content();
    let url = format!("https://www.notion.so/example/release-notes-{}", PAGE_HEX);

    let unfurls = resolve_links(&workspace, &FixedVisibility(false), &[shared(&url)]).await;

    assert!(unfurls.is_empty());
}

#[tokio::test]
async fn unfurl_key_is_the_original_url_even_when_sanitized_for_parsing() {
    let workspace = workspace_with_content();
    // Slack double-escaped the separator; the modal-view id rides in `p`.
    let original = format!(
        "https://www.notion.so/example/release-notes-{}?v=1&amp;p={}",
        test_id("ee"),
        PAGE_HEX
    );

    let unfurls = resolve_links(&workspace, &FixedVisibility(true), &[shared(&original)]).await;

    assert_eq!(unfurls.len(), 1);
    assert!(unfurls.contains_key(&original));
    assert_eq!(unfurls[&original].title, "Release Notes");
}

#[tokio::test]
async fn modal_view_query_parameter_wins_over_the_slug() {
    let workspace = workspace_with_content();
    let url = format!(
        "https://www.notion.so/example/other-page-{}?p={}",
        test_id("ff"),
        PAGE_HEX
    );

    let unfurls = resolve_links(&workspace, &FixedVisibility(true), &[shared(&url)]).await;

    assert_eq!(unfurls.len(), 1);
    assert_eq!(unfurls[&url].title, "Release Notes");
}

#[tokio::test]
async fn bad_links_are_skipped_and_the_batch_continues() {
    let workspace = workspace_with_content();
    let good = format!("https://www.notion.so/example/release-notes-{}", PAGE_HEX);
    let links = vec![
        SharedLink {
            url: "https://example.com/not-notion".to_string(),
            domain: "example.com".to_string(),
        },
        // Notion domain but no parseable identifier in the trailing segment.
        shared("https://www.notion.so/"),
        shared(&good),
    ];

    let unfurls = resolve_links(&workspace, &FixedVisibility(true), &links).await;

    assert_eq!(unfurls.len(), 1);
    assert!(unfurls.contains_key(&good));
}

#[tokio::test]
async fn unresolvable_page_still_yields_a_preview_with_empty_title() {
    // The visibility probe says public but the API cannot resolve the page:
    // the body and breadcrumbs degrade to empty rather than erroring out.
    let url = format!("https://www.notion.so/example/ghost-{}", PAGE_HEX);

    let unfurls = resolve_links(
        &FakeWorkspace::new(),
        &FixedVisibility(true),
        &[shared(&url)],
    )
    .await;

    assert_eq!(unfurls.len(), 1);
    assert_eq!(unfurls[&url].title, "");
    assert_eq!(unfurls[&url].text, "");
}
