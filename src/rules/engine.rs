//! Rules engine trait for turn-based judging.
//!
//! A turn is a fixed cycle:
//! 1. `start_turn` - bump the turn counter
//! 2. `process_turn` - apply the mover's command
//! 3. `termination` - decide whether the game is over
//! 4. `end_game` (terminal) or `end_turn` (pass to the next seat)
//!
//! `play_turn` runs the whole cycle for drivers that don't need the steps.

use crate::core::action::Command;
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::rules::scoring::{GameSummary, Termination};

/// What one full turn cycle produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on with the next seat.
    Continue { forbidden: bool },
    /// The game is over.
    Ended {
        summary: GameSummary,
        reason: Termination,
    },
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `process_turn`: returns `true` when the move broke a rule. Rule
///   violations are data, never errors.
/// - `process_turn`: must validate before mutating; an `Err` leaves hands,
///   deck and table unchanged.
/// - `termination`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Open a new turn.
    fn start_turn(&mut self);

    /// Apply a command for the current player.
    fn process_turn(&mut self, command: &Command) -> Result<bool, GameError>;

    /// Check if the game is over, and why.
    fn termination(&self) -> Option<Termination>;

    /// Pass the turn to the next seat.
    fn end_turn(&mut self);

    /// Close the game and report.
    fn end_game(&mut self) -> GameSummary;

    // === Convenience Methods ===

    fn is_finished(&self) -> bool {
        self.termination().is_some()
    }

    /// Run one full turn cycle.
    fn play_turn(&mut self, command: &Command) -> Result<TurnOutcome, GameError> {
        self.start_turn();
        let forbidden = self.process_turn(command)?;

        match self.termination() {
            Some(reason) => Ok(TurnOutcome::Ended {
                summary: self.end_game(),
                reason,
            }),
            None => {
                self.end_turn();
                Ok(TurnOutcome::Continue { forbidden })
            }
        }
    }
}
