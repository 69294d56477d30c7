//! Decoded moves and their history.
//!
//! A `Command` is one move by the current player:
//! - `PlayCard` / `DropCard` name a slot in the mover's own hand
//! - `TellColor` / `TellRank` name an attribute and the slots of the next
//!   player's hand that supposedly carry it
//!
//! Slot positions are only valid for the turn they are issued in. Every play
//! or drop shifts later cards one slot to the left.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::player::PlayerId;
use crate::cards::{Color, Hint, RankDigit};

/// Hand slots named by a tell.
/// SmallVec covers a full hand without heap allocation.
pub type Positions = SmallVec<[usize; 5]>;

/// The kind of an input line, including the one that is not a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    StartGame,
    PlayCard,
    DropCard,
    TellColor,
    TellRank,
}

impl CommandKind {
    /// Fixed text that opens a line of this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CommandKind::StartGame => "Start new game with deck",
            CommandKind::PlayCard => "Play card",
            CommandKind::DropCard => "Drop card",
            CommandKind::TellColor => "Tell color",
            CommandKind::TellRank => "Tell rank",
        }
    }
}

/// A single move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    PlayCard { position: usize },
    DropCard { position: usize },
    TellColor { color: Color, positions: Positions },
    TellRank { rank: RankDigit, positions: Positions },
}

impl Command {
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::PlayCard { .. } => CommandKind::PlayCard,
            Command::DropCard { .. } => CommandKind::DropCard,
            Command::TellColor { .. } => CommandKind::TellColor,
            Command::TellRank { .. } => CommandKind::TellRank,
        }
    }

    /// Build a color tell.
    #[must_use]
    pub fn tell_color(color: Color, positions: &[usize]) -> Self {
        Command::TellColor {
            color,
            positions: SmallVec::from_slice(positions),
        }
    }

    /// Build a rank tell. Takes a card `Rank` or any `RankDigit`.
    #[must_use]
    pub fn tell_rank(rank: impl Into<RankDigit>, positions: &[usize]) -> Self {
        Command::TellRank {
            rank: rank.into(),
            positions: SmallVec::from_slice(positions),
        }
    }

    /// The hint and named slots, for tells.
    #[must_use]
    pub fn hint(&self) -> Option<(Hint, &[usize])> {
        match self {
            Command::TellColor { color, positions } => {
                Some((Hint::Color(*color), positions.as_slice()))
            }
            Command::TellRank { rank, positions } => {
                Some((Hint::Rank(*rank), positions.as_slice()))
            }
            Command::PlayCard { .. } | Command::DropCard { .. } => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PlayCard { position } | Command::DropCard { position } => {
                write!(f, "{} {}", self.kind().keyword(), position)
            }
            Command::TellColor { color, positions } => {
                write!(f, "{} {} cards", self.kind().keyword(), color)?;
                positions.iter().try_for_each(|p| write!(f, " {}", p))
            }
            Command::TellRank { rank, positions } => {
                write!(f, "{} {} cards", self.kind().keyword(), rank)?;
                positions.iter().try_for_each(|p| write!(f, " {}", p))
            }
        }
    }
}

/// A processed command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move.
    pub command: Command,

    /// Turn number the move was made on (first turn is 1).
    pub turn: u32,

    /// Whether the move broke a rule.
    pub forbidden: bool,
}

impl CommandRecord {
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, forbidden: bool) -> Self {
        Self {
            player,
            command,
            turn,
            forbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_command_kind() {
        assert_eq!(Command::PlayCard { position: 0 }.kind(), CommandKind::PlayCard);
        assert_eq!(Command::DropCard { position: 4 }.kind(), CommandKind::DropCard);
        assert_eq!(Command::tell_color(Color::Red, &[0]).kind(), CommandKind::TellColor);
        assert_eq!(
            Command::tell_rank(Rank::new(1).unwrap(), &[0]).kind(),
            CommandKind::TellRank
        );
    }

    #[test]
    fn test_command_hint() {
        let tell = Command::tell_color(Color::Green, &[1, 3]);
        let (hint, positions) = tell.hint().unwrap();

        assert_eq!(hint, Hint::Color(Color::Green));
        assert_eq!(positions, &[1, 3]);
        assert!(Command::PlayCard { position: 2 }.hint().is_none());
    }

    #[test]
    fn test_command_display_matches_input_syntax() {
        assert_eq!(Command::PlayCard { position: 3 }.to_string(), "Play card 3");
        assert_eq!(Command::DropCard { position: 0 }.to_string(), "Drop card 0");
        assert_eq!(
            Command::tell_color(Color::Red, &[0, 2]).to_string(),
            "Tell color Red cards 0 2"
        );
        assert_eq!(
            Command::tell_rank(Rank::new(3).unwrap(), &[1]).to_string(),
            "Tell rank 3 cards 1"
        );
    }

    #[test]
    fn test_command_record_serialization() {
        let record = CommandRecord::new(
            PlayerId::new(1),
            Command::tell_rank(Rank::new(5).unwrap(), &[0, 4]),
            7,
            true,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
