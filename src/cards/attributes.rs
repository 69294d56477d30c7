//! Card attributes: the two things a hint can talk about.
//!
//! - `Color`: one of five suits, written as a name (`Red`) in hints and as a
//!   letter (`R`) in card codes.
//! - `Rank`: 1 through 5.
//! - `RankDigit`: the rank a tell names, any single digit. Digits outside
//!   1 through 5 are legal input and simply match no card.
//! - `Hint`: a color or a rank digit, as carried by a tell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ParseError;

/// Card color (suit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Color {
    /// All colors in table order.
    pub const ALL: [Color; 5] = [Color::Red, Color::Green, Color::Blue, Color::White, Color::Yellow];

    /// Number of colors (and table stacks).
    pub const COUNT: usize = Self::ALL.len();

    /// Index of this color's stack on the table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in card tokens.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }

    /// Decode a card-token letter.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }

    /// Full name used in `Tell color` commands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::White => "White",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

/// Card rank, always within `Rank::MIN..=Rank::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rank, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidRank(value.to_string()))
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every rank, lowest first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidRank(s.to_string()))?;
        Self::new(value).map_err(|_| ParseError::InvalidRank(s.to_string()))
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// A rank as named in a `Tell rank` command: one decimal digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RankDigit(u8);

impl RankDigit {
    pub const MAX: u8 = 9;

    /// Create a digit, rejecting values above 9.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidRank(value.to_string()))
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The card rank this digit names, if any card can carry it.
    #[must_use]
    pub fn rank(self) -> Option<Rank> {
        Rank::new(self.0).ok()
    }
}

impl fmt::Display for RankDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exactly one ASCII digit.
impl FromStr for RankDigit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [digit @ b'0'..=b'9'] => Ok(Self(digit - b'0')),
            _ => Err(ParseError::InvalidRank(s.to_string())),
        }
    }
}

impl TryFrom<u8> for RankDigit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RankDigit> for u8 {
    fn from(digit: RankDigit) -> Self {
        digit.0
    }
}

impl From<Rank> for RankDigit {
    fn from(rank: Rank) -> Self {
        Self(rank.0)
    }
}

/// The attribute named by a tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    Color(Color),
    Rank(RankDigit),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Color(color) => write!(f, "color {}", color),
            Hint::Rank(rank) => write!(f, "rank {}", rank),
        }
    }
}

impl From<Color> for Hint {
    fn from(color: Color) -> Self {
        Hint::Color(color)
    }
}

impl From<Rank> for Hint {
    fn from(rank: Rank) -> Self {
        Hint::Rank(rank.into())
    }
}

impl From<RankDigit> for Hint {
    fn from(digit: RankDigit) -> Self {
        Hint::Rank(digit)
    }
}
