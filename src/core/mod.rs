//! Core engine types: players, commands, configuration, errors, RNG.
//!
//! This module holds the building blocks every other module leans on.
//! Nothing here knows the rules of play.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Command, CommandKind, CommandRecord, Positions};
pub use config::GameConfig;
pub use error::{GameError, ParseError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
