//! Contact Book - Main entry point
//!
//! Loads the contact book from disk and runs the interactive shell on
//! stdin/stdout.

use anyhow::Result;
use contact_book::repositories::JsonFileRepository;
use contact_book::shell::{self, CommandHandler};
use contact_book::{Config, ContactService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env is honoured
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr only, stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let repository = Box::new(JsonFileRepository::new(&config.data_file));
    let service = ContactService::load(repository, config.page_size)?;
    let mut handler = CommandHandler::new(service);

    shell::run_shell(&mut handler).await?;

    info!("Contact book closed");
    Ok(())
}
