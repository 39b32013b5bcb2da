//! Rewind Games - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{RejectionMode, ReplayFormat, Shell, ShellConfig, run_replay};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the shell's output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            silent,
            no_board,
        } => run_play(config, silent, no_board),
        Command::Replay { moves, jump, json } => {
            let format = if json { ReplayFormat::Json } else { ReplayFormat::Text };
            run_replay(&moves, jump, format, &mut std::io::stdout().lock())
        }
    }
}

/// Run the interactive shell on stdin/stdout
fn run_play(config_path: Option<PathBuf>, silent: bool, no_board: bool) -> Result<()> {
    let config_path =
        config_path.or_else(|| std::env::var_os("REWIND_CONFIG").map(PathBuf::from));

    let mut config = match &config_path {
        Some(path) => ShellConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            debug!("No config file given, using defaults");
            ShellConfig::default()
        }
    };
    if silent {
        config = config.with_rejections(RejectionMode::Silent);
    }
    if no_board {
        config = config.with_show_board(false);
    }

    info!(rejections = %config.rejections(), "Starting shell");
    let stdin = std::io::stdin();
    let mut shell = Shell::new(stdin.lock(), std::io::stdout(), config)?;
    shell.run()
}
