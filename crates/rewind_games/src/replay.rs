//! Non-interactive replay of a scripted move list.

use crate::render::{render_board, render_moves};
use anyhow::{Context, Result};
use rewind_tictactoe::{HistoryEngine, MoveOrder};
use std::io::Write;
use tracing::{info, instrument};

/// Output format for a replayed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// Board, status and move list as text.
    #[default]
    Text,
    /// The game's [`HistoryView`](rewind_tictactoe::HistoryView) as JSON.
    Json,
}

/// Applies `cells` from the start of a game, optionally jumps, and returns
/// the resulting engine.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>) -> Result<HistoryEngine> {
    let mut engine =
        HistoryEngine::replay(cells).with_context(|| format!("Replay of {:?} was rejected", cells))?;
    if let Some(step) = jump {
        engine
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    info!(moves = cells.len(), step = engine.step(), status = %engine.status(), "Replay finished");
    Ok(engine)
}

/// Replays and writes the result in the requested format.
#[instrument(skip(out))]
pub fn run_replay(
    cells: &[usize],
    jump: Option<usize>,
    format: ReplayFormat,
    out: &mut impl Write,
) -> Result<()> {
    let engine = replay(cells, jump)?;
    match format {
        ReplayFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &engine.view())
                .context("Failed to serialize game")?;
            writeln!(out)?;
        }
        ReplayFormat::Text => {
            writeln!(out, "{}", render_board(&engine))?;
            writeln!(out)?;
            writeln!(out, "{}", render_moves(&engine, MoveOrder::Ascending))?;
        }
    }
    Ok(())
}
