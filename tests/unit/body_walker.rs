// tests/unit/body_walker.rs
//! Bounded recursive rendering of a page's content tree.

use crate::common::{test_id, FakeWorkspace};
use notion_unfurler::{
    page_body, Block, BlockCommon, BodyOptions, NotionId, TextBlockContent,
};
use pretty_assertions::assert_eq;

fn paragraph(id: &NotionId, text: &str) -> Block {
    Block::Paragraph {
        common: BlockCommon::new(id.clone()),
        content: TextBlockContent::from_text(text),
    }
}

fn paragraph_with_children(id: &NotionId, text: &str) -> Block {
    Block::Paragraph {
        common: BlockCommon::with_children(id.clone()),
        content: TextBlockContent::from_text(text),
    }
}

#[tokio::test]
async fn block_count_caps_each_level() {
    let page = test_id("1");
    let blocks = (0..5)
        .map(|i| paragraph(&test_id(&format!("b{}", i)), &format!("line {}", i)))
        .collect();
    let workspace = FakeWorkspace::new().with_children(&page, blocks);

    let options = BodyOptions {
        block_count: 2,
        ..BodyOptions::default()
    };
    let body = page_body(&workspace, page, options).await;

    assert_eq!(body, "line 0\nline 1\n");
}

#[tokio::test]
async fn zero_depth_never_expands_children() {
    let page = test_id("1");
    let child = test_id("c1");
    let workspace = FakeWorkspace::new()
        .with_children(&page, vec![paragraph_with_children(&child, "parent line")])
        .with_children(&child, vec![paragraph(&test_id("c2"), "never rendered")]);

    let options = BodyOptions {
        depth: 0,
        ..BodyOptions::default()
    };
    let body = page_body(&workspace, page, options).await;

    assert_eq!(body, "parent line\n");
}

#[tokio::test]
async fn nested_children_are_indented_and_follow_their_parent() {
    let page = test_id("1");
    let first = test_id("c1");
    let workspace = FakeWorkspace::new()
        .with_children(
            &page,
            vec![
                paragraph_with_children(&first, "first"),
                paragraph(&test_id("c2"), "second"),
            ],
        )
        .with_children(&first, vec![paragraph(&test_id("c3"), "nested")]);

    let body = page_body(&workspace, page, BodyOptions::default()).await;

    assert_eq!(body, "first\n    nested\nsecond\n");
}

#[tokio::test]
async fn depth_budget_decreases_per_level() {
    // grandchild sits two levels down; depth 1 stops after one expansion.
    let page = test_id("1");
    let child = test_id("c1");
    let grandchild = test_id("c2");
    let workspace = FakeWorkspace::new()
        .with_children(&page, vec![paragraph_with_children(&child, "child")])
        .with_children(
            &child,
            vec![paragraph_with_children(&grandchild, "grandchild")],
        )
        .with_children(&grandchild, vec![paragraph(&test_id("c3"), "too deep")]);

    let options = BodyOptions {
        depth: 1,
        ..BodyOptions::default()
    };
    let body = page_body(&workspace, page, options).await;

    assert_eq!(body, "child\n    grandchild\n");
}

#[tokio::test]
async fn empty_block_lines_are_dropped_but_their_children_kept() {
    // An unsupported block renders to nothing, yet its children are walked.
    let page = test_id("1");
    let toggle = test_id("c1");
    let workspace = FakeWorkspace::new()
        .with_children(
            &page,
            vec![Block::Unsupported {
                common: BlockCommon::with_children(toggle.clone()),
                block_type: "toggle".to_string(),
            }],
        )
        .with_children(&toggle, vec![paragraph(&test_id("c2"), "inside")]);

    let body = page_body(&workspace, page, BodyOptions::default()).await;

    assert_eq!(body, "    inside\n");
}
