// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_unfurler::config::{AppConfig, CommandLineInput};
use notion_unfurler::slack::server::{router, AppState};
use notion_unfurler::{NotionHttpClient, PageChunkClient, SlackApiClient};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion_unfurler.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = Arc::new(AppConfig::resolve(cli)?);

    let state = Arc::new(AppState {
        reader: Arc::new(NotionHttpClient::new(&config.notion_api_key)?),
        visibility: PageChunkClient::new(&config.notion_cookie, config.notion_space_id.clone())?,
        slack: SlackApiClient::new(&config.slack_bot_token)?,
        config: Arc::clone(&config),
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    log::info!("Listening for Slack events on port {}", config.port);
    if state.config.guardian_channels.is_empty() {
        log::info!("Guardian disabled (no GUARDIAN_CHANNELS configured)");
    } else {
        log::info!(
            "Guardian watching {} channel(s)",
            state.config.guardian_channels.len()
        );
    }

    axum::serve(listener, router(state)).await?;

    Ok(())
}
