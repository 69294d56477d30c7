//! Card system: attributes and cards in play.
//!
//! ## Key Types
//!
//! - `Color`, `Rank`: card identity
//! - `RankDigit`, `Hint`: the attribute a tell names
//! - `Card`: identity plus the holder's knowledge (possible sets, known flags)

pub mod attributes;
pub mod instance;

pub use attributes::{Color, Hint, Rank, RankDigit};
pub use instance::{Card, Knowledge};
