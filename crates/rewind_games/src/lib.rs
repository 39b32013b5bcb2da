//! Rewind Games - session host and terminal shell for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Session**: one [`rewind_tictactoe::HistoryEngine`] per game behind a
//!   shared lock, one mutator at a time
//! - **Shell**: line-oriented play over any reader/writer
//! - **Replay**: scripted move lists rendered as text or JSON
//! - **Config**: TOML shell settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod replay;
mod session;
mod shell;

pub use config::{ConfigError, RejectionMode, ShellConfig};
pub use render::{render_board, render_moves, render_status};
pub use replay::{ReplayFormat, replay, run_replay};
pub use session::{SessionError, SessionErrorKind, SessionId, SessionManager};
pub use shell::{Flow, ParseCommandError, Shell, ShellCommand};
