//! A player's hand.
//!
//! Slots are addressed by position. Playing or dropping removes the card at
//! a position and appends the replacement at the end, so every card to the
//! right of the removed slot shifts one position left.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::GameError;

/// Ordered hand of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 5]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Cards in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Fail unless `position` addresses a card in this hand.
    pub fn check_position(&self, position: usize) -> Result<(), GameError> {
        if position < self.cards.len() {
            Ok(())
        } else {
            Err(GameError::PositionOutOfRange {
                position,
                hand_size: self.cards.len(),
            })
        }
    }

    /// Remove the card at `position` and append `replacement` at the end.
    ///
    /// Returns the removed card.
    pub fn replace(&mut self, position: usize, replacement: Card) -> Result<Card, GameError> {
        self.check_position(position)?;
        let removed = self.cards.remove(position);
        self.cards.push(replacement);
        Ok(removed)
    }

    /// Count cards satisfying a predicate.
    pub fn count(&self, predicate: impl Fn(&Card) -> bool) -> usize {
        self.cards.iter().filter(|card| predicate(card)).count()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
