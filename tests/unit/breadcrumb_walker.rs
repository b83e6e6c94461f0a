// tests/unit/breadcrumb_walker.rs
//! Bounded recursive resolution of ancestor trails.

use crate::common::{test_id, FakeWorkspace};
use notion_unfurler::{
    page_breadcrumbs, Database, DatabaseObject, NotionId, Page, PageObject, Parent, PropertyValue,
    RichTextItem,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn page(id: &NotionId, title: &str, parent: Parent) -> PageObject {
    let mut properties = HashMap::new();
    properties.insert(
        "Name".to_string(),
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

#[tokio::test]
async fn workspace_rooted_page_is_a_singleton_trail() {
    let workspace = FakeWorkspace::new();
    let leaf = page(&test_id("1"), "Leaf", Parent::Workspace);

    let trail = page_breadcrumbs(&workspace, leaf, 2).await;

    assert_eq!(trail, vec!["Leaf".to_string()]);
}

#[tokio::test]
async fn exhausted_budget_yields_no_trail() {
    let workspace = FakeWorkspace::new();
    let leaf = page(&test_id("1"), "Leaf", Parent::Workspace);

    let trail = page_breadcrumbs(&workspace, leaf, 0).await;

    assert_eq!(trail, Vec::<String>::new());
}

#[tokio::test]
async fn page_chain_resolves_two_ancestors_at_depth_two() {
    let grandparent = test_id("a");
    let parent = test_id("b");
    let great = test_id("d");

    let workspace = FakeWorkspace::new()
        .with_page(page(
            &parent,
            "Parent",
            Parent::Page {
                page_id: grandparent.clone(),
            },
        ))
        .with_page(page(
            &grandparent,
            "Grandparent",
            Parent::Page {
                page_id: great.clone(),
            },
        ))
        .with_page(page(&great, "Great", Parent::Workspace));

    let leaf = page(
        &test_id("c"),
        "Leaf",
        Parent::Page {
            page_id: parent.clone(),
        },
    );
    let trail = page_breadcrumbs(&workspace, leaf, 2).await;

    // Depth is exhausted before the grandparent's own parent is fetched.
    assert_eq!(
        trail,
        vec![
            "Grandparent".to_string(),
            "Parent".to_string(),
            "Leaf".to_string()
        ]
    );
}

#[tokio::test]
async fn database_parent_contributes_ancestors_but_not_its_own_title() {
    let database = test_id("d1");
    let database_parent = test_id("a");

    let workspace = FakeWorkspace::new()
        .with_database(DatabaseObject::Database(Database {
            id: database.clone(),
            parent: Parent::Page {
                page_id: database_parent.clone(),
            },
            title: vec![RichTextItem::new("Decisions DB")],
        }))
        .with_page(page(&database_parent, "Team Space", Parent::Workspace));

    let leaf = page(
        &test_id("c"),
        "Leaf",
        Parent::Database {
            database_id: database.clone(),
        },
    );
    let trail = page_breadcrumbs(&workspace, leaf, 2).await;

    assert_eq!(trail, vec!["Team Space".to_string(), "Leaf".to_string()]);
}

#[tokio::test]
async fn workspace_rooted_database_ends_the_trail() {
    let database = test_id("d1");
    let workspace = FakeWorkspace::new().with_database(DatabaseObject::Database(Database {
        id: database.clone(),
        parent: Parent::Workspace,
        title: vec![],
    }));

    let leaf = page(
        &test_id("c"),
        "Leaf",
        Parent::Database {
            database_id: database.clone(),
        },
    );
    let trail = page_breadcrumbs(&workspace, leaf, 2).await;

    assert_eq!(trail, vec!["Leaf".to_string()]);
}

#[tokio::test]
async fn terminal_parent_truncates_the_trail() {
    let parent = test_id("b");
    let workspace =
        FakeWorkspace::new().with_page(PageObject::Partial { id: parent.clone() });

    let leaf = page(
        &test_id("c"),
        "Leaf",
        Parent::Page {
            page_id: parent.clone(),
        },
    );
    let trail = page_breadcrumbs(&workspace, leaf, 2).await;

    assert_eq!(trail, vec!["Leaf".to_string()]);
}

#[tokio::test]
async fn unfetchable_parent_truncates_the_trail() {
    // Parent id registered nowhere: the fetch fails and the walk stops.
    let leaf = page(
        &test_id("c"),
        "Leaf",
        Parent::Page {
            page_id: test_id("b"),
        },
    );
    let trail = page_breadcrumbs(&FakeWorkspace::new(), leaf, 2).await;

    assert_eq!(trail, vec!["Leaf".to_string()]);
}

#[tokio::test]
async fn terminal_page_itself_contributes_nothing() {
    let trail = page_breadcrumbs(
        &FakeWorkspace::new(),
        PageObject::Partial { id: test_id("c") },
        2,
    )
    .await;

    assert_eq!(trail, Vec::<String>::new());
}
