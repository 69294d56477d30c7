//! Game configuration.
//!
//! The rule constants a game is built with. The standard two-player game
//! deals five cards to each seat; everything else follows from the card
//! attributes (five colors, ranks up to five).

use serde::{Deserialize, Serialize};

use crate::cards::{Color, Rank};
use crate::core::error::GameError;

/// Rule constants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats. Hints always go to the next seat.
    pub player_count: usize,

    /// Cards held by each player.
    pub hand_size: usize,
}

impl GameConfig {
    /// Two players, five cards each.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            player_count: 2,
            hand_size: 5,
        }
    }

    /// Cards needed to fill every hand at the deal.
    #[must_use]
    pub const fn dealt_cards(&self) -> usize {
        self.player_count * self.hand_size
    }

    /// Successful plays that complete every stack.
    #[must_use]
    pub const fn max_score(&self) -> usize {
        Color::COUNT * Rank::MAX as usize
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count < 2 {
            return Err(GameError::Config(format!(
                "need at least 2 players, got {}",
                self.player_count
            )));
        }
        if self.player_count > u8::MAX as usize {
            return Err(GameError::Config(format!(
                "at most {} players supported, got {}",
                u8::MAX,
                self.player_count
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::Config("hand size must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
