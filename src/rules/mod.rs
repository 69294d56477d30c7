//! Rules of play.
//!
//! - `engine`: the `RulesEngine` turn-cycle trait
//! - `hints`: knowledge updates and hint honesty
//! - `risk`: risky-play classification
//! - `scoring`: table stacks, termination, summary
//!
//! Everything except `engine` is free functions and plain data, so each
//! rule can be tested without a running game.

pub mod engine;
pub mod hints;
pub mod risk;
pub mod scoring;

pub use engine::{RulesEngine, TurnOutcome};
pub use hints::{apply_hint, check_hint, HintCheck};
pub use risk::is_risky_play;
pub use scoring::{check_termination, GameSummary, Table, Termination, TerminationInput};
