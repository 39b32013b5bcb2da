//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::MoveOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What the shell does when the engine rejects a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RejectionMode {
    /// Print the rejection reason.
    #[default]
    Report,
    /// Ignore rejected moves without output.
    Silent,
}

/// Configuration for the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// How rejected moves are surfaced.
    #[serde(default)]
    rejections: RejectionMode,

    /// Ordering of the `history` listing.
    #[serde(default)]
    move_order: MoveOrder,

    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Print the board after every accepted command.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            rejections: RejectionMode::default(),
            move_order: MoveOrder::default(),
            prompt: default_prompt(),
            show_board: default_show_board(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rejections = %config.rejections, move_order = %config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns this config with a different rejection mode.
    pub fn with_rejections(mut self, rejections: RejectionMode) -> Self {
        self.rejections = rejections;
        self
    }

    /// Returns this config with a different board echo setting.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
