// tests/integration/guardian_gate.rs
//! Decision-record guardian gating.

use crate::common::{test_id, FakeWorkspace};
use notion_unfurler::{
    event_warrants_reminder, AppConfig, LinkSharedEvent, NotionId, Page, PageObject, Parent,
    PropertyValue, RichTextItem, SharedLink,
};
use std::collections::HashMap;

const DECISION_HEX: &str = "4f1c6a2e8b0d49d5a37e5c2b91d0f4aa";

fn guardian_config() -> AppConfig {
    AppConfig {
        guardian_channels: vec!["C123WATCHED".to_string()],
        decision_database_id: Some(test_id("dec1")),
        ..AppConfig::default()
    }
}

fn event_in(channel: &str, url: &str) -> LinkSharedEvent {
    LinkSharedEvent {
        channel: channel.to_string(),
        message_ts: "1724567890.000100".to_string(),
        links: vec![SharedLink {
            url: url.to_string(),
            domain: "notion.so".to_string(),
        }],
    }
}

fn decision_url() -> String {
    format!("https://www.notion.so/example/use-rust-{}", DECISION_HEX)
}

fn decision_page(parent: Parent) -> PageObject {
    let mut properties = HashMap::new();
    properties.insert(
        "Name".to_string(),
        PropertyValue::Title {
            title: vec![RichTextItem::new("Use Rust")],
        },
    );
    PageObject::Page(Page {
        id: NotionId::parse(DECISION_HEX).unwrap(),
        parent,
        properties,
    })
}

fn adopted_decision_workspace(config: &AppConfig) -> FakeWorkspace {
    let page_id = NotionId::parse(DECISION_HEX).unwrap();
    FakeWorkspace::new()
        .with_page(decision_page(Parent::Database {
            database_id: test_id("dec1"),
        }))
        .with_property(
            &page_id,
            &config.decision_property_id,
            PropertyValue::Select {
                name: Some("Go".to_string()),
            },
        )
}

#[tokio::test]
async fn adopted_decision_in_watched_channel_warrants_a_reminder() {
    let config = guardian_config();
    let workspace = adopted_decision_workspace(&config);
    let event = event_in("C123WATCHED", &decision_url());

    assert!(event_warrants_reminder(&workspace, &config, &event).await);
}

#[tokio::test]
async fn unwatched_channel_never_warrants_a_reminder() {
    let config = guardian_config();
    let workspace = adopted_decision_workspace(&config);
    let event = event_in("C999OTHER", &decision_url());

    assert!(!event_warrants_reminder(&workspace, &config, &event).await);
}

#[tokio::test]
async fn page_outside_the_decision_database_does_not_match() {
    let config = guardian_config();
    let page_id = NotionId::parse(DECISION_HEX).unwrap();
    let workspace = FakeWorkspace::new()
        .with_page(decision_page(Parent::Page {
            page_id: test_id("a"),
        }))
        .with_property(
            &page_id,
            &config.decision_property_id,
            PropertyValue::Select {
                name: Some("Go".to_string()),
            },
        );
    let event = event_in("C123WATCHED", &decision_url());

    assert!(!event_warrants_reminder(&workspace, &config, &event).await);
}

#[tokio::test]
async fn decision_not_yet_adopted_does_not_match() {
    let config = guardian_config();
    let page_id = NotionId::parse(DECISION_HEX).unwrap();
    let workspace = FakeWorkspace::new()
        .with_page(decision_page(Parent::Database {
            database_id: test_id("dec1"),
        }))
        .with_property(
            &page_id,
            &config.decision_property_id,
            PropertyValue::Select {
                name: Some("Draft".to_string()),
            },
        );
    let event = event_in("C123WATCHED", &decision_url());

    assert!(!event_warrants_reminder(&workspace, &config, &event).await);
}

#[tokio::test]
async fn unresolvable_page_fails_closed() {
    let config = guardian_config();
    let event = event_in("C123WATCHED", &decision_url());

    assert!(!event_warrants_reminder(&FakeWorkspace::new(), &config, &event).await);
}

#[tokio::test]
async fn guardian_is_inert_without_a_decision_database() {
    let config = AppConfig {
        guardian_channels: vec!["C123WATCHED".to_string()],
        decision_database_id: None,
        ..AppConfig::default()
    };
    let workspace = adopted_decision_workspace(&guardian_config());
    let event = event_in("C123WATCHED", &decision_url());

    assert!(!event_warrants_reminder(&workspace, &config, &event).await);
}

#[tokio::test]
async fn any_matching_link_in_the_batch_is_enough() {
    let config = guardian_config();
    let workspace = adopted_decision_workspace(&config);
    let mut event = event_in("C123WATCHED", "https://example.com/elsewhere");
    event.links[0].domain = "example.com".to_string();
    event.links.push(SharedLink {
        url: decision_url(),
        domain: "notion.so".to_string(),
    });

    assert!(event_warrants_reminder(&workspace, &config, &event).await);
}
