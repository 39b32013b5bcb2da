//! Tests for move application, time travel and status projection.

use rewind_tictactoe::{
    Board, GameError, GameStatus, HistoryEngine, MoveOrder, Player, Position, Square,
};

fn winning_game() -> HistoryEngine {
    let mut engine = HistoryEngine::new();
    for cell in [0, 1, 3, 4, 6] {
        engine.apply_move(cell).expect("Valid move");
    }
    engine
}

#[test]
fn test_winning_sequence() {
    let engine = winning_game();

    assert_eq!(engine.status(), GameStatus::Winner(Player::X));
    assert_eq!(engine.len(), 6);
    assert_eq!(engine.step(), 5);
}

#[test]
fn test_history_starts_empty_and_grows_by_one() {
    let mut engine = HistoryEngine::new();
    assert_eq!(engine.history(), &[Board::new()]);

    engine.apply_move(4).unwrap();
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.history()[0], Board::new());
    assert_eq!(engine.current().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = HistoryEngine::replay(&[4]).unwrap();
    let before = engine.clone();

    let result = engine.apply_move(4);

    assert_eq!(result, Err(GameError::CellOccupied(Position::Center)));
    assert_eq!(engine, before);
}

#[test]
fn test_move_after_win_rejected_without_change() {
    let mut engine = winning_game();
    let before = engine.clone();

    assert_eq!(engine.apply_move(8), Err(GameError::GameOver(Player::X)));
    assert_eq!(engine, before);
}

#[test]
fn test_jump_does_not_truncate() {
    let mut engine = winning_game();

    assert_eq!(engine.jump_to(2), Ok(2));

    assert_eq!(engine.step(), 2);
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::X));
    assert_eq!(engine.len(), 6);
}

#[test]
fn test_move_after_jump_discards_future() {
    let mut engine = winning_game();
    let kept = engine.history()[..3].to_vec();
    engine.jump_to(2).unwrap();

    assert_eq!(engine.apply_move(7), Ok(Player::X));

    assert_eq!(engine.len(), 4);
    assert_eq!(engine.step(), 3);
    assert_eq!(&engine.history()[..3], kept.as_slice());
    assert_eq!(engine.current().get(Position::BottomCenter), Square::Occupied(Player::X));
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::O));
}

#[test]
fn test_turn_follows_jump_parity() {
    let mut engine = winning_game();

    engine.jump_to(3).unwrap();
    assert_eq!(engine.to_move(), Player::O);

    engine.jump_to(0).unwrap();
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(engine.current(), &Board::new());
}

#[test]
fn test_won_game_can_still_be_navigated() {
    let mut engine = winning_game();

    engine.jump_to(4).unwrap();
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::X));
    engine.jump_to(5).unwrap();
    assert_eq!(engine.status(), GameStatus::Winner(Player::X));
}

#[test]
fn test_invalid_jump_rejected_without_change() {
    let mut engine = winning_game();
    let before = engine.clone();

    assert_eq!(engine.jump_to(6), Err(GameError::InvalidStep { step: 6, len: 6 }));
    assert_eq!(engine, before);
}

#[test]
fn test_status_is_pure() {
    let engine = winning_game();
    let first = engine.status();
    for _ in 0..3 {
        assert_eq!(engine.status(), first);
    }
}

#[test]
fn test_move_list_after_branching() {
    let mut engine = winning_game();
    engine.jump_to(1).unwrap();
    engine.apply_move(8).unwrap();

    let moves = engine.moves();
    let descriptions: Vec<String> = moves.iter().map(|m| m.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Go to game start".to_string(),
            "Go to move #1: X at (1, 1)".to_string(),
            "Go to move #2: O at (3, 3)".to_string(),
        ]
    );
    assert!(*moves[2].is_current());

    let reversed = engine.moves_in(MoveOrder::Descending);
    assert_eq!(*reversed[0].step(), 2);
    assert_eq!(*reversed[2].step(), 0);
}

#[test]
fn test_full_board_without_winner_reports_parity() {
    let mut engine = HistoryEngine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    let before = engine.clone();

    assert_eq!(engine.status(), GameStatus::NextToMove(Player::O));
    assert!(engine.is_draw());
    assert_eq!(engine.apply_move(0), Err(GameError::CellOccupied(Position::TopLeft)));
    assert_eq!(engine, before);
}
