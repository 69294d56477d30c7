//! # hanabi-judge
//!
//! A rule-checking judge for two-player Hanabi, driven by a text command
//! stream.
//!
//! ## Design Principles
//!
//! 1. **Authoritative State**: The engine owns every card, stack and counter.
//!    Drivers hand it decoded commands and read back plain values.
//!
//! 2. **Violations Are Data**: An illegal play or dishonest hint latches the
//!    mover's forbidden flag and ends the game at the next check. Only
//!    malformed input is an error.
//!
//! 3. **Knowledge on the Card**: Each card carries what its holder has been
//!    told, so hint logic never consults side tables.
//!
//! ## Modules
//!
//! - `core`: players, commands, configuration, errors, RNG
//! - `cards`: colors, ranks, cards with holder knowledge
//! - `zones`: deck and hands
//! - `rules`: turn-cycle trait, hints, risk, scoring
//! - `games`: the Hanabi engine
//! - `protocol`: line parser and session driver

pub mod cards;
pub mod core;
pub mod games;
pub mod protocol;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandKind, CommandRecord, GameConfig, GameError, GameRng, ParseError, Player,
    PlayerId, PlayerMap, Positions,
};

pub use crate::cards::{Card, Color, Hint, Knowledge, Rank, RankDigit};

pub use crate::zones::{Deck, Hand};

pub use crate::rules::{
    GameSummary, HintCheck, RulesEngine, Table, Termination, TurnOutcome,
};

pub use crate::games::hanabi::{HanabiGame, HanabiGameBuilder};

pub use crate::protocol::{parse_line, Input, Session};
