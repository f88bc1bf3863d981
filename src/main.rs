//! Main entry point for the application.
//!
//! Initializes logging, loads environment variables, builds the conversation
//! from the command line and sends it to the chat endpoint once.

mod cli;

use aichat::config::{build_conversation, ClientSettings};
use aichat::utils;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, warn};

async fn run(cli: cli::Cli) -> aichat::Result<Option<String>> {
    let settings = ClientSettings::resolve(cli.api_key, cli.model, cli.endpoint)?;
    let client = settings.build_client()?;
    let messages = build_conversation(
        cli.conversation.as_deref(),
        cli.system.as_deref(),
        &cli.messages,
        cli.role,
    )?;
    client.chat(&messages).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    match run(cli).await {
        Ok(Some(reply)) => {
            println!("{}", reply);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
