//! Tactics Lobby - terminal front end
//!
//! Plays through the client screens offline or previews a session snapshot.

#![warn(missing_docs)]

mod cli;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tactics_lobby::{ClientConfig, SessionState, run_interactive, run_preview};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play { auth } => {
            let config = if auth {
                config.with_auth_enabled(true)
            } else {
                config
            };
            run_interactive(&config)
        }
        Command::Preview { snapshot } => {
            let state = SessionState::from_json_file(&snapshot)?;
            run_preview(&config, &state)
        }
    }
}

/// Logs to a file so output does not interfere with the terminal UI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}

#[instrument]
fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) => Ok(ClientConfig::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(ClientConfig::default())
        }
    }
}
