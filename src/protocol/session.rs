//! Session driver: feeds decoded lines to the current game.
//!
//! A session owns at most one game at a time:
//! - `Start new game ...` replaces whatever game was running
//! - every other line is one turn of the current game
//! - when a turn ends the game, its summary is handed back
//!
//! Moves with no game to apply them to (none started yet, or the last one
//! already over) are logged and skipped. Malformed lines are fatal.

use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::games::hanabi::{HanabiGame, HanabiGameBuilder};
use crate::protocol::parser::{parse_line, Input};
use crate::rules::{GameSummary, RulesEngine, TurnOutcome};

/// Line-by-line judge.
#[derive(Debug, Default)]
pub struct Session {
    config: GameConfig,
    game: Option<HanabiGame>,
}

impl Session {
    /// Create a session for standard games.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose games use `config`.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self { config, game: None }
    }

    /// The current (or most recently finished) game.
    #[must_use]
    pub fn game(&self) -> Option<&HanabiGame> {
        self.game.as_ref()
    }

    /// Handle one input line.
    ///
    /// Returns the summary when the line ended a game.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<GameSummary>, GameError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        match parse_line(line)? {
            Input::StartGame { cards } => {
                let game = HanabiGameBuilder::new()
                    .config(self.config.clone())
                    .deal(&cards)?;
                self.game = Some(game);
                Ok(None)
            }
            Input::Command(command) => match self.active_game() {
                Ok(game) => match game.play_turn(&command)? {
                    TurnOutcome::Continue { .. } => Ok(None),
                    TurnOutcome::Ended { summary, reason } => {
                        log::info!("game ended ({:?}) on turn {}", reason, summary.turn);
                        Ok(Some(summary))
                    }
                },
                Err(err) if err.is_recoverable() => {
                    log::warn!("ignoring {:?}: {}", line, err);
                    Ok(None)
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Handle every line in order, collecting the summaries of finished games.
    ///
    /// Stops at the first fatal error.
    pub fn run<I, S>(&mut self, lines: I) -> Result<Vec<GameSummary>, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summaries = Vec::new();
        for line in lines {
            if let Some(summary) = self.handle_line(line.as_ref())? {
                summaries.push(summary);
            }
        }
        Ok(summaries)
    }

    /// The game a move applies to, if one is still running.
    fn active_game(&mut self) -> Result<&mut HanabiGame, GameError> {
        self.game
            .as_mut()
            .filter(|game| !game.is_finished())
            .ok_or(GameError::NoActiveGame)
    }
}
