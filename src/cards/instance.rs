//! Cards in play - identity plus what the holder has been told.
//!
//! A `Card` never changes its identity (color, rank). What changes is the
//! holder's knowledge of it: the sets of colors and ranks it could still be,
//! narrowed only by hints.
//!
//! ## Knowledge
//!
//! A color counts as known when a hint named the card for that color, or
//! when elimination left exactly one possible color. Ranks work the same way.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attributes::{Color, Hint, Rank};
use crate::core::error::ParseError;

/// Summary of what the holder knows about a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Knowledge {
    /// Neither attribute is known.
    Unknown,
    /// Color known, rank not.
    ColorKnown,
    /// Rank known, color not.
    RankKnown,
    /// Both attributes known.
    FullyKnown,
}

/// A card with its holder's knowledge state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    color: Color,
    rank: Rank,

    /// Colors the holder cannot yet rule out.
    possible_colors: FxHashSet<Color>,

    /// Ranks the holder cannot yet rule out.
    possible_ranks: FxHashSet<Rank>,

    /// Set once a hint names this card for its color.
    color_hinted: bool,

    /// Set once a hint names this card for its rank.
    rank_hinted: bool,
}

impl Card {
    /// Create a card the holder knows nothing about.
    #[must_use]
    pub fn new(color: Color, rank: Rank) -> Self {
        Self {
            color,
            rank,
            possible_colors: Color::ALL.into_iter().collect(),
            possible_ranks: Rank::all().collect(),
            color_hinted: false,
            rank_hinted: false,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Colors this card could still be, from the holder's view.
    #[must_use]
    pub fn possible_colors(&self) -> &FxHashSet<Color> {
        &self.possible_colors
    }

    /// Ranks this card could still be, from the holder's view.
    #[must_use]
    pub fn possible_ranks(&self) -> &FxHashSet<Rank> {
        &self.possible_ranks
    }

    #[must_use]
    pub fn is_color_known(&self) -> bool {
        self.color_hinted || self.possible_colors.len() == 1
    }

    #[must_use]
    pub fn is_rank_known(&self) -> bool {
        self.rank_hinted || self.possible_ranks.len() == 1
    }

    #[must_use]
    pub fn knowledge(&self) -> Knowledge {
        match (self.is_color_known(), self.is_rank_known()) {
            (false, false) => Knowledge::Unknown,
            (true, false) => Knowledge::ColorKnown,
            (false, true) => Knowledge::RankKnown,
            (true, true) => Knowledge::FullyKnown,
        }
    }

    /// Whether this card actually carries the hinted attribute.
    #[must_use]
    pub fn matches(&self, hint: Hint) -> bool {
        match hint {
            Hint::Color(color) => self.color == color,
            Hint::Rank(digit) => digit.rank() == Some(self.rank),
        }
    }

    /// The holder was told this card has the attribute.
    ///
    /// Collapses the possible set to the hinted value, even when the hint is
    /// a lie. A rank digit no card can carry leaves the rank set empty.
    pub fn reveal(&mut self, hint: Hint) {
        match hint {
            Hint::Color(color) => {
                self.color_hinted = true;
                self.possible_colors.clear();
                self.possible_colors.insert(color);
            }
            Hint::Rank(digit) => {
                self.rank_hinted = true;
                self.possible_ranks.clear();
                self.possible_ranks.extend(digit.rank());
            }
        }
    }

    /// The holder learned, by omission, that this card lacks the attribute.
    pub fn exclude(&mut self, hint: Hint) {
        match hint {
            Hint::Color(color) => {
                self.possible_colors.remove(&color);
            }
            Hint::Rank(digit) => {
                if let Some(rank) = digit.rank() {
                    self.possible_ranks.remove(&rank);
                }
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.rank)
    }
}

/// Parse a two-character card code such as `R1` or `Y5`.
impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (Some(code), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let color = Color::from_code(code).ok_or_else(invalid)?;
        let rank = digit
            .to_digit(10)
            .and_then(|value| Rank::new(value as u8).ok())
            .ok_or_else(invalid)?;

        Ok(Self::new(color, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::attributes::RankDigit;

    fn rank(value: u8) -> Rank {
        Rank::new(value).unwrap()
    }

    #[test]
    fn test_card_new_knows_nothing() {
        let card = Card::new(Color::Red, rank(1));

        assert_eq!(card.possible_colors().len(), 5);
        assert_eq!(card.possible_ranks().len(), 5);
        assert!(!card.is_color_known());
        assert!(!card.is_rank_known());
        assert_eq!(card.knowledge(), Knowledge::Unknown);
    }

    #[test]
    fn test_card_parse() {
        let card: Card = "G4".parse().unwrap();
        assert_eq!(card.color(), Color::Green);
        assert_eq!(card.rank(), rank(4));
        assert_eq!(card.to_string(), "G4");
    }

    #[test]
    fn test_card_parse_rejects_bad_codes() {
        for code in ["X1", "R0", "R6", "R", "", "RR", "r1", "R12", "R01", "R+1", "R001"] {
            assert_eq!(
                code.parse::<Card>(),
                Err(ParseError::InvalidCard(code.to_string())),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_reveal_color() {
        let mut card = Card::new(Color::Blue, rank(2));
        card.reveal(Hint::Color(Color::Blue));

        assert!(card.is_color_known());
        assert!(!card.is_rank_known());
        assert_eq!(card.knowledge(), Knowledge::ColorKnown);
        assert_eq!(card.possible_colors().len(), 1);
        assert!(card.possible_colors().contains(&Color::Blue));
    }

    #[test]
    fn test_reveal_rank_even_when_false() {
        let mut card = Card::new(Color::Blue, rank(2));
        card.reveal(Hint::from(rank(4)));

        assert!(card.is_rank_known());
        assert!(card.possible_ranks().contains(&rank(4)));
        assert!(!card.matches(Hint::from(rank(4))));
    }

    #[test]
    fn test_reveal_impossible_rank_digit() {
        let mut card = Card::new(Color::Blue, rank(2));
        let six = Hint::Rank(RankDigit::new(6).unwrap());
        assert!(!card.matches(six));

        card.reveal(six);
        assert!(card.is_rank_known());
        assert!(card.possible_ranks().is_empty());

        let mut other = Card::new(Color::Blue, rank(2));
        other.exclude(six);
        assert_eq!(other.possible_ranks().len(), 5);
    }

    #[test]
    fn test_exclusion_to_single_value_counts_as_known() {
        let mut card = Card::new(Color::White, rank(5));
        for r in 1..=4 {
            card.exclude(Hint::from(rank(r)));
        }

        assert!(card.is_rank_known());
        assert_eq!(card.knowledge(), Knowledge::RankKnown);
    }

    #[test]
    fn test_both_known() {
        let mut card = Card::new(Color::Yellow, rank(3));
        card.reveal(Hint::Color(Color::Yellow));
        card.reveal(Hint::from(rank(3)));

        assert_eq!(card.knowledge(), Knowledge::FullyKnown);
    }

    #[test]
    fn test_exclude_can_empty_a_revealed_set() {
        let mut card = Card::new(Color::Red, rank(1));
        card.reveal(Hint::Color(Color::Green));
        card.exclude(Hint::Color(Color::Green));

        assert!(card.possible_colors().is_empty());
        // The explicit flag survives elimination.
        assert!(card.is_color_known());
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::new(Color::Red, rank(3));
        card.exclude(Hint::Color(Color::Blue));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
