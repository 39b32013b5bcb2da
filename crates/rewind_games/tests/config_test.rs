//! Tests for loading shell configuration from disk.

use rewind_games::{RejectionMode, ShellConfig};
use rewind_tictactoe::MoveOrder;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rejections = \"silent\"").unwrap();
    writeln!(file, "move_order = \"descending\"").unwrap();

    let config = ShellConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.rejections(), RejectionMode::Silent);
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert_eq!(config.prompt(), "> ");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ShellConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: Failed to read config file"));
}
