// src/config.rs
use crate::error::AppError;
use crate::types::NotionId;
use clap::Parser;

/// Default decision property id (URL-encoded), matching the "Decision"
/// select property of the decision-record database.
const DEFAULT_DECISION_PROPERTY_ID: &str = "hhz%7C";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Port to listen on for Slack event subscriptions
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved service configuration — validated and ready to run on.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub verbose: bool,
    pub slack_bot_token: String,
    pub slack_signing_secret: String,
    pub notion_api_key: String,
    /// Notion web-session cookie used by the visibility probe.
    pub notion_cookie: String,
    /// Workspace id sent with every visibility probe.
    pub notion_space_id: String,
    /// Channels the guardian watches; empty disables the guardian.
    pub guardian_channels: Vec<String>,
    /// Reminder text posted as a threaded reply.
    pub guardian_message: String,
    /// Database whose rows count as decision records.
    pub decision_database_id: Option<NotionId>,
    /// URL-encoded id of the decision select property.
    pub decision_property_id: String,
}

impl AppConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let decision_database_id = match std::env::var("DECISION_DATABASE_ID") {
            Ok(raw) => Some(NotionId::parse(&raw)?),
            Err(_) => None,
        };

        Ok(AppConfig {
            port: cli.port,
            verbose: cli.verbose,
            slack_bot_token: require_env("SLACK_BOT_TOKEN")?,
            slack_signing_secret: require_env("SLACK_SIGNING_SECRET")?,
            notion_api_key: require_env("NOTION_API_KEY")?,
            notion_cookie: require_env("NOTION_COOKIE_TOKEN")?,
            notion_space_id: require_env("NOTION_SPACE_ID")?,
            guardian_channels: std::env::var("GUARDIAN_CHANNELS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|channel| !channel.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            guardian_message: std::env::var("GUARDIAN_MESSAGE").unwrap_or_else(|_| {
                "An adopted decision record was shared here - please review it.".to_string()
            }),
            decision_database_id,
            decision_property_id: std::env::var("DECISION_PROPERTY_ID")
                .unwrap_or_else(|_| DEFAULT_DECISION_PROPERTY_ID.to_string()),
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| {
        AppError::MissingConfiguration(format!("{} environment variable not set", name))
    })
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            verbose: false,
            slack_bot_token: "xoxb-test".to_string(),
            slack_signing_secret: "secret".to_string(),
            notion_api_key: "secret_test".to_string(),
            notion_cookie: "token_v2=test".to_string(),
            notion_space_id: "f4012e63-3e93-4948-a7a2-609936dee3d3".to_string(),
            guardian_channels: Vec::new(),
            guardian_message: "review the decision".to_string(),
            decision_database_id: None,
            decision_property_id: DEFAULT_DECISION_PROPERTY_ID.to_string(),
        }
    }
}
