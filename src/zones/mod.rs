//! Card locations.
//!
//! ## Key Types
//!
//! - `Deck`: front-draw pile, consumed in dealt order
//! - `Hand`: positional slots, refilled at the end after each play or drop
//!
//! Played and dropped cards leave the game; only table stack heights are
//! kept, see `rules::scoring::Table`.

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
