//! History engine: board snapshots, a step pointer, and time travel.

use super::action::GameError;
use super::contracts::{Contract, MoveContract};
use super::moves::{self, MoveOrder, StepSummary};
use super::rules;
use super::view::HistoryView;
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with full move history.
///
/// The engine is the only owner of the history and the step pointer.
/// Callers read boards through shared borrows or copies and change state
/// only through [`apply_move`](Self::apply_move) and
/// [`jump_to`](Self::jump_to).
///
/// Whose turn it is never gets stored: it is derived from the parity of the
/// step pointer, so jumping around history can't desynchronize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

impl HistoryEngine {
    /// Creates a game at its start: one empty snapshot, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a game by applying cell indices in order from the start.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, GameError> {
        let mut engine = Self::new();
        for &cell in cells {
            engine.apply_move(cell)?;
        }
        Ok(engine)
    }

    /// Snapshot selected by the step pointer.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Every recorded snapshot, game start first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Derived status of the current snapshot: the winner, or else the
    /// player whose turn it is by step parity.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        match rules::check_winner(self.current()) {
            Some(winner) => GameStatus::Winner(winner),
            None => GameStatus::NextToMove(self.to_move()),
        }
    }

    /// True when the current snapshot is full and nobody has won.
    ///
    /// `status()` still names the next player in that case; every further
    /// move is rejected as occupied.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current())
    }

    /// Winning triple on the current snapshot, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current()).map(|(_, line)| line)
    }

    /// Places the current player's mark at `cell` (0-8).
    ///
    /// Any snapshots after the current step are discarded before the new
    /// one is appended, so a move made after a jump starts a new branch.
    /// Returns the mark that was placed. On rejection nothing changes.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Player, GameError> {
        let position = Position::from_index(cell).ok_or_else(|| {
            debug!(cell, "Rejected move outside the board");
            GameError::CellOutOfBounds(cell)
        })?;

        MoveContract::pre(self, &position).inspect_err(|e| {
            debug!(cell, error = %e, "Rejected move");
        })?;

        let player = self.to_move();
        let snapshot = self.current().with_mark(position, player);

        let mut next = self.clone();
        let discarded = next.history.len() - (next.step + 1);
        next.history.truncate(next.step + 1);
        next.history.push(snapshot);
        next.step += 1;

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        info!(
            %player,
            %position,
            step = self.step,
            discarded,
            "Move applied"
        );
        Ok(player)
    }

    /// Moves the step pointer to `step` without touching history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<usize, GameError> {
        if step >= self.history.len() {
            debug!(step, "Rejected jump outside history");
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        info!(step, to_move = %self.to_move(), "Jumped to step");
        Ok(step)
    }

    /// Move list in chronological order.
    pub fn moves(&self) -> Vec<StepSummary> {
        self.moves_in(MoveOrder::Ascending)
    }

    /// Move list in the requested order.
    pub fn moves_in(&self, order: MoveOrder) -> Vec<StepSummary> {
        moves::summarize(&self.history, self.step, order)
    }

    /// Read-only projection of the whole game for presentation layers.
    pub fn view(&self) -> HistoryView {
        HistoryView::from(self)
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
