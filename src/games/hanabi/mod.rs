//! Two-player Hanabi, as judged from a command stream.
//!
//! - Each player holds five cards and acts in turn
//! - A move plays a card, drops a card, or tells the other player about
//!   one color or rank in their hand
//! - Plays must extend their color's stack by exactly one
//! - Tells must name every matching card and nothing else
//! - Any rule violation, an empty deck, or 25 successful plays ends the game
//!
//! The builder supports other seat counts and hand sizes; tells then go to
//! the next seat.

mod game;

pub use game::{HanabiGame, HanabiGameBuilder};
