//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a shell config file (falls back to $REWIND_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ignore rejected moves instead of reporting them
        #[arg(long)]
        silent: bool,

        /// Don't reprint the board after every move or jump
        #[arg(long)]
        no_board: bool,
    },

    /// Replay a comma-separated list of cells and print the result
    Replay {
        /// Cells to play in order, e.g. 0,1,3,4,6
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game as JSON
        #[arg(long)]
        json: bool,
    },
}
