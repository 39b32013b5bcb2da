//! Line-oriented terminal shell for playing and time-travelling.
//!
//! The shell holds no game state of its own: it keeps the id of the active
//! session and renders whatever the [`SessionManager`] hands back.

use crate::config::{RejectionMode, ShellConfig};
use crate::render::{render_board, render_moves, render_status};
use crate::session::{SessionError, SessionErrorKind, SessionId, SessionManager};
use anyhow::Result;
use derive_more::{Display, Error};
use rewind_tictactoe::{GameError, MoveOrder, Position};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  move <cell|label>  place the next mark (cells 0-8, or e.g. `top left`)
  jump <step>        go back (or forward) to a recorded step
  history            list recorded steps
  order              toggle history ordering
  status             show the current status
  board              show the current board
  new                start a new game
  sessions           list games
  switch <id>        switch to another game
  help               show this help
  quit               leave";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Place a mark at a raw cell index.
    Move(usize),
    /// Move the step pointer.
    Jump(usize),
    /// Print the move list.
    History,
    /// Toggle move list ordering.
    Order,
    /// Print the status line.
    Status,
    /// Print the board.
    Board,
    /// Start a new game session.
    New,
    /// List sessions.
    Sessions,
    /// Make another session active.
    Switch(SessionId),
    /// Print help.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct ParseCommandError {
    /// What was wrong with the input.
    pub message: String,
}

impl ParseCommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn parse_cell(arg: &str) -> Result<usize, ParseCommandError> {
    if let Ok(cell) = arg.parse::<usize>() {
        // Out-of-range numbers go to the engine, which rejects them itself.
        return Ok(cell);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| ParseCommandError::new(format!("Unknown position: {}", arg)))
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let require_arg = |name: &str| {
            if rest.is_empty() {
                Err(ParseCommandError::new(format!("`{}` needs an argument", name)))
            } else {
                Ok(rest)
            }
        };

        match word.to_lowercase().as_str() {
            "move" | "m" => parse_cell(require_arg("move")?).map(ShellCommand::Move),
            "jump" | "j" => require_arg("jump")?
                .parse::<usize>()
                .map(ShellCommand::Jump)
                .map_err(|_| ParseCommandError::new(format!("Not a step number: {}", rest))),
            "history" | "h" => Ok(ShellCommand::History),
            "order" => Ok(ShellCommand::Order),
            "status" | "s" => Ok(ShellCommand::Status),
            "board" | "b" => Ok(ShellCommand::Board),
            "new" => Ok(ShellCommand::New),
            "sessions" => Ok(ShellCommand::Sessions),
            "switch" => Ok(ShellCommand::Switch(require_arg("switch")?.to_string())),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(ParseCommandError::new(format!("Unknown command: {}", other))),
        }
    }
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Interactive shell over any line reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    sessions: SessionManager,
    active: SessionId,
    order: MoveOrder,
    games_started: usize,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with its own session manager and one fresh game.
    pub fn new(input: R, output: W, config: ShellConfig) -> Result<Self> {
        Self::with_sessions(input, output, config, SessionManager::new())
    }

    /// Creates a shell on a shared session manager and starts a fresh game.
    #[instrument(skip_all)]
    pub fn with_sessions(
        input: R,
        output: W,
        config: ShellConfig,
        sessions: SessionManager,
    ) -> Result<Self> {
        let order = *config.move_order();
        let mut shell = Self {
            input,
            output,
            config,
            sessions,
            active: SessionId::new(),
            order,
            games_started: 0,
        };
        shell.active = shell.start_game()?;
        Ok(shell)
    }

    /// The session manager behind this shell.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Id of the session commands apply to.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Consumes the shell, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn start_game(&mut self) -> Result<SessionId> {
        loop {
            self.games_started += 1;
            let id = format!("game-{}", self.games_started);
            match self.sessions.create_session(id) {
                Ok(id) => return Ok(id),
                Err(SessionError {
                    kind: SessionErrorKind::AlreadyExists(_),
                    ..
                }) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Reads and executes commands until `quit` or end of input.
    #[instrument(skip(self), fields(session = %self.active))]
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        writeln!(self.output, "Tic-tac-toe with time travel. Type `help` for commands.")?;
        self.show_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{}. Type `help` for commands.", e)?,
            }
        }

        info!("Shell finished");
        Ok(())
    }

    /// Executes one command against the active session.
    #[instrument(skip(self), fields(session = %self.active))]
    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Move(cell) => {
                let result = self.sessions.apply_move(&self.active, cell);
                let occupied = matches!(
                    result.as_ref().map_err(SessionError::game_error),
                    Err(Some(GameError::CellOccupied(_)))
                );
                match self.accepted(result)? {
                    Some(player) => {
                        match Position::from_index(cell) {
                            Some(pos) => writeln!(self.output, "{} played {}", player, pos)?,
                            None => writeln!(self.output, "{} played cell {}", player, cell)?,
                        }
                        self.echo_board()?;
                    }
                    None if occupied => self.list_open_cells()?,
                    None => {}
                }
            }
            ShellCommand::Jump(step) => {
                let result = self.sessions.jump_to(&self.active, step);
                if let Some(step) = self.accepted(result)? {
                    writeln!(self.output, "Jumped to step {}", step)?;
                    self.echo_board()?;
                }
            }
            ShellCommand::History => {
                let engine = self.sessions.get_session(&self.active)?;
                writeln!(self.output, "{}", render_moves(&engine, self.order))?;
            }
            ShellCommand::Order => {
                self.order = self.order.toggled();
                writeln!(self.output, "Move list order: {}", self.order)?;
            }
            ShellCommand::Status => {
                let engine = self.sessions.get_session(&self.active)?;
                writeln!(self.output, "{}", render_status(&engine))?;
            }
            ShellCommand::Board => self.show_board()?,
            ShellCommand::New => {
                self.active = self.start_game()?;
                writeln!(self.output, "Started {}", self.active)?;
                self.echo_board()?;
            }
            ShellCommand::Sessions => {
                for id in self.sessions.list_sessions()? {
                    let marker = if id == self.active { "*" } else { " " };
                    writeln!(self.output, "{} {}", marker, id)?;
                }
            }
            ShellCommand::Switch(id) => match self.sessions.get_session(&id) {
                Ok(_) => {
                    self.active = id;
                    writeln!(self.output, "Switched to {}", self.active)?;
                    self.echo_board()?;
                }
                Err(SessionError {
                    kind: kind @ SessionErrorKind::NotFound(_),
                    ..
                }) => writeln!(self.output, "{}", kind)?,
                Err(e) => return Err(e.into()),
            },
            ShellCommand::Help => writeln!(self.output, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Splits engine rejections (reported or swallowed per config) from
    /// session failures (propagated).
    fn accepted<T>(&mut self, result: Result<T, SessionError>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => match e.game_error() {
                Some(rejection) => {
                    if *self.config.rejections() == RejectionMode::Report {
                        writeln!(self.output, "Rejected: {}", rejection)?;
                    }
                    Ok(None)
                }
                None => Err(e.into()),
            },
        }
    }

    /// Points the player at the squares still open after an occupied-cell
    /// rejection. Silent mode stays silent.
    fn list_open_cells(&mut self) -> Result<()> {
        if *self.config.rejections() == RejectionMode::Silent {
            return Ok(());
        }
        let engine = self.sessions.get_session(&self.active)?;
        let open: Vec<String> = Position::valid_moves(engine.current())
            .into_iter()
            .map(|pos| format!("{} ({})", pos.to_index(), pos))
            .collect();
        if open.is_empty() {
            writeln!(self.output, "No open squares left.")?;
        } else {
            writeln!(self.output, "Open squares: {}", open.join(", "))?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let engine = self.sessions.get_session(&self.active)?;
        writeln!(self.output, "{}", render_board(&engine))?;
        Ok(())
    }

    fn echo_board(&mut self) -> Result<()> {
        if *self.config.show_board() {
            self.show_board()?;
        }
        Ok(())
    }
}
