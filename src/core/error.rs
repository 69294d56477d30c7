//! Error taxonomy.
//!
//! Two tiers:
//! - `ParseError`: malformed input (unknown keyword, color, card code).
//!   Fatal for the run.
//! - `GameError`: anything that stops the engine from applying a command.
//!
//! Rule violations (illegal plays, dishonest hints) are NOT errors. They are
//! reported as the `forbidden` flag of a processed turn and latched on the
//! acting player.

use thiserror::Error;

/// Input that could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Wrong command: {0:?}")]
    UnknownCommand(String),

    #[error("Wrong color: {0:?}")]
    UnknownColor(String),

    #[error("Wrong card value: {0:?}")]
    InvalidCard(String),

    #[error("Wrong rank: {0:?}")]
    InvalidRank(String),

    #[error("Wrong card position: {0:?}")]
    InvalidPosition(String),

    #[error("Missing {0} in command")]
    MissingArgument(&'static str),
}

/// Failure to apply a command to a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Card position {position} is outside a hand of {hand_size}")]
    PositionOutOfRange { position: usize, hand_size: usize },

    #[error("Deck is exhausted")]
    DeckExhausted,

    #[error("Deal needs {needed} cards, got {found}")]
    NotEnoughCards { needed: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No game in progress")]
    NoActiveGame,
}

impl GameError {
    /// Whether a driver may skip the offending command and keep reading.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::NoActiveGame)
    }
}
