//! Plain-text rendering of a game for terminal output.

use rewind_tictactoe::{HistoryEngine, MoveOrder};

/// Status line, followed by the winning line when won or a draw marker
/// when the board filled up without a winner.
pub fn render_status(engine: &HistoryEngine) -> String {
    let mut out = engine.status().to_string();
    if let Some(line) = engine.winning_line() {
        let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        out.push_str(&format!(" ({})", labels.join(", ")));
    } else if engine.is_draw() {
        out.push_str(" (draw: no open squares)");
    }
    out
}

/// Board grid followed by the status line.
pub fn render_board(engine: &HistoryEngine) -> String {
    format!("{}\n{}", engine.current().display(), render_status(engine))
}

/// One line per history step; the current step is marked with `>`.
pub fn render_moves(engine: &HistoryEngine, order: MoveOrder) -> String {
    engine
        .moves_in(order)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_won_board() {
        let engine = HistoryEngine::replay(&[0, 1, 3, 4, 6]).unwrap();
        assert_eq!(
            render_board(&engine),
            "X|O|2\n-+-+-\nX|O|5\n-+-+-\nX|7|8\nWinner: X (Top-left, Middle-left, Bottom-left)"
        );
    }

    #[test]
    fn test_render_drawn_board() {
        let engine = HistoryEngine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(
            render_board(&engine),
            "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X\nNext player: O (draw: no open squares)"
        );
    }

    #[test]
    fn test_render_status_in_progress() {
        let engine = HistoryEngine::replay(&[4]).unwrap();
        assert_eq!(render_status(&engine), "Next player: O");
    }

    #[test]
    fn test_render_moves_marks_current() {
        let mut engine = HistoryEngine::replay(&[4, 0]).unwrap();
        engine.jump_to(1).unwrap();
        assert_eq!(
            render_moves(&engine, MoveOrder::Descending),
            "   2. Go to move #2: O at (1, 1)\n>  1. Go to move #1: X at (2, 2)\n   0. Go to game start"
        );
    }
}
