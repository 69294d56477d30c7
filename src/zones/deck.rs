//! The draw pile.
//!
//! Cards are drawn from the front only, in the order they were dealt. The
//! deck never grows and is never reordered once a game starts.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Color, Rank};
use crate::core::error::ParseError;
use crate::core::rng::GameRng;

/// Copies of each rank (1 through 5) in one color of a standard deck.
const STANDARD_COPIES: [usize; 5] = [3, 2, 2, 2, 1];

/// Ordered draw pile.
///
/// Backed by `im::Vector` so snapshots of a game clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse space-separated card codes, first token drawn first.
    ///
    /// ```
    /// use hanabi_judge::zones::Deck;
    ///
    /// let mut deck = Deck::parse("R1 G2 Y5").unwrap();
    /// assert_eq!(deck.len(), 3);
    /// assert_eq!(deck.draw().unwrap().to_string(), "R1");
    /// ```
    pub fn parse(codes: &str) -> Result<Self, ParseError> {
        codes.split_whitespace().map(str::parse).collect()
    }

    /// The 50-card standard deck, unshuffled.
    ///
    /// Each color has three 1s, two each of 2 to 4, and a single 5.
    #[must_use]
    pub fn standard() -> Self {
        Color::ALL
            .into_iter()
            .flat_map(|color| {
                Rank::all()
                    .zip(STANDARD_COPIES)
                    .flat_map(move |(rank, copies)| {
                        std::iter::repeat_with(move || Card::new(color, rank)).take(copies)
                    })
            })
            .collect()
    }

    /// The standard deck in a seeded random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::standard().cards.into_iter().collect();
        rng.shuffle(&mut cards);
        cards.into_iter().collect()
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Space-separated card codes, in draw order.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.iter();
        if let Some(first) = cards.next() {
            write!(f, "{}", first)?;
        }
        cards.try_for_each(|card| write!(f, " {}", card))
    }
}
