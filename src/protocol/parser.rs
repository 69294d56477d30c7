//! Line decoder.
//!
//! Input lines look like:
//!
//! ```text
//! Start new game with deck R1 G1 B1 ...
//! Play card 0
//! Drop card 4
//! Tell color Red cards 0 2
//! Tell rank 3 cards 1
//! ```
//!
//! The first two words select the command. Anything that does not decode is
//! a `ParseError`.

use crate::cards::{Color, RankDigit};
use crate::core::action::{Command, CommandKind, Positions};
use crate::core::error::ParseError;

/// One decoded input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Start a game from the given card codes (still undecoded).
    StartGame { cards: String },
    /// A move in the current game.
    Command(Command),
}

/// Identify a line's command from its first two words.
pub fn command_kind(line: &str) -> Result<CommandKind, ParseError> {
    let mut words = line.split_whitespace();
    let starter = (words.next(), words.next());

    match starter {
        (Some("Start"), Some("new")) => Ok(CommandKind::StartGame),
        (Some("Play"), Some("card")) => Ok(CommandKind::PlayCard),
        (Some("Drop"), Some("card")) => Ok(CommandKind::DropCard),
        (Some("Tell"), Some("color")) => Ok(CommandKind::TellColor),
        (Some("Tell"), Some("rank")) => Ok(CommandKind::TellRank),
        _ => Err(ParseError::UnknownCommand(line.to_string())),
    }
}

/// Decode a full input line.
///
/// ```
/// use hanabi_judge::core::Command;
/// use hanabi_judge::protocol::{parse_line, Input};
///
/// let input = parse_line("Play card 3").unwrap();
/// assert_eq!(input, Input::Command(Command::PlayCard { position: 3 }));
/// ```
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let kind = command_kind(line)?;
    // Skip the two keyword words.
    let mut args = line.split_whitespace().skip(2);

    let input = match kind {
        CommandKind::StartGame => {
            for expected in ["game", "with", "deck"] {
                if args.next() != Some(expected) {
                    return Err(ParseError::UnknownCommand(line.to_string()));
                }
            }
            Input::StartGame {
                cards: args.collect::<Vec<_>>().join(" "),
            }
        }
        CommandKind::PlayCard => Input::Command(Command::PlayCard {
            position: parse_single_position(args)?,
        }),
        CommandKind::DropCard => Input::Command(Command::DropCard {
            position: parse_single_position(args)?,
        }),
        CommandKind::TellColor => {
            let color: Color = args.next().ok_or(ParseError::MissingArgument("color"))?.parse()?;
            let positions = parse_tell_positions(args)?;
            Input::Command(Command::TellColor { color, positions })
        }
        CommandKind::TellRank => {
            let rank: RankDigit =
                args.next().ok_or(ParseError::MissingArgument("rank"))?.parse()?;
            let positions = parse_tell_positions(args)?;
            Input::Command(Command::TellRank { rank, positions })
        }
    };

    Ok(input)
}

fn parse_position(word: &str) -> Result<usize, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidPosition(word.to_string()))
}

/// Exactly one position and nothing after it.
fn parse_single_position<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<usize, ParseError> {
    let position = parse_position(args.next().ok_or(ParseError::MissingArgument("position"))?)?;
    match args.next() {
        Some(extra) => Err(ParseError::InvalidPosition(extra.to_string())),
        None => Ok(position),
    }
}

/// `cards` followed by at least one position.
fn parse_tell_positions<'a>(
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Positions, ParseError> {
    if args.next() != Some("cards") {
        return Err(ParseError::MissingArgument("cards"));
    }

    let positions = args
        .map(parse_position)
        .collect::<Result<Positions, _>>()?;
    if positions.is_empty() {
        return Err(ParseError::MissingArgument("position"));
    }
    Ok(positions)
}
