//! Command-line interface for tactics_lobby.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tactics Lobby - screen flow and party builder for the tactics client
#[derive(Parser, Debug)]
#[command(name = "tactics_lobby")]
#[command(about = "Terminal front end for the tactics client screens", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a client config TOML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file; the terminal belongs to the UI
    #[arg(long, global = true, default_value = "tactics_lobby.log")]
    pub log_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play through the screens against an offline session
    Play {
        /// Enable centralized auth (hides name entry)
        #[arg(long)]
        auth: bool,
    },

    /// Render one session snapshot (JSON) and exit on key press
    Preview {
        /// Path to the snapshot file
        snapshot: PathBuf,
    },
}
