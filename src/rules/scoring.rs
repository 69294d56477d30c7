//! Table stacks, termination, and the end-of-game report.
//!
//! ## Termination
//!
//! A game ends as soon as any of these holds, checked after every turn:
//! - it was explicitly declared over
//! - the deck is empty
//! - every stack is complete
//! - some player made a forbidden move

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Color, Rank};
use crate::core::player::{Player, PlayerId, PlayerMap};

/// Highest rank played per color. Zero means nothing played yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    stacks: [u8; Color::COUNT],
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of a color's stack.
    #[must_use]
    pub fn height(&self, color: Color) -> u8 {
        self.stacks[color.index()]
    }

    /// All stack heights in `Color::ALL` order.
    #[must_use]
    pub fn heights(&self) -> [u8; Color::COUNT] {
        self.stacks
    }

    /// Whether `card` is the next rank its color needs.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        card.rank().value() - 1 == self.height(card.color())
    }

    /// Extend a color's stack by one.
    ///
    /// Callers check `accepts` first; a complete stack stays complete.
    pub fn advance(&mut self, color: Color) {
        let stack = &mut self.stacks[color.index()];
        if *stack < Rank::MAX {
            *stack += 1;
        }
    }

    /// Whether every stack has the same height.
    #[must_use]
    pub fn is_level(&self) -> bool {
        self.stacks.iter().all(|&h| h == self.stacks[0])
    }

    /// Sum of stack heights.
    #[must_use]
    pub fn total(&self) -> usize {
        self.stacks.iter().map(|&h| h as usize).sum()
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Ended explicitly (`end_game` already ran).
    Declared,
    /// The deck ran out.
    DeckExhausted,
    /// Every stack is complete.
    PerfectScore,
    /// A player broke a rule.
    ForbiddenMove(PlayerId),
}

/// Public counters the termination check reads.
#[derive(Clone, Copy, Debug)]
pub struct TerminationInput<'a> {
    pub declared: bool,
    pub deck_len: usize,
    pub cards_played: usize,
    pub max_score: usize,
    pub players: &'a PlayerMap<Player>,
}

/// Decide whether a game is over, and why.
///
/// Reasons are checked in declaration order; the first that holds wins.
#[must_use]
pub fn check_termination(input: TerminationInput<'_>) -> Option<Termination> {
    if input.declared {
        return Some(Termination::Declared);
    }
    if input.deck_len == 0 {
        return Some(Termination::DeckExhausted);
    }
    if input.cards_played == input.max_score {
        return Some(Termination::PerfectScore);
    }
    input
        .players
        .iter()
        .find(|(_, player)| player.made_forbidden_move())
        .map(|(id, _)| Termination::ForbiddenMove(id))
}

/// End-of-game report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSummary {
    /// Turns started, including the last one.
    pub turn: u32,
    /// Successful plays.
    pub cards_played: u32,
    /// Successful plays made without certainty.
    pub risky_plays: u32,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}, cards: {}, with risk: {}",
            self.turn, self.cards_played, self.risky_plays
        )
    }
}
