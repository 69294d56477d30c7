//! Risk classification for successful plays.
//!
//! A legal play is risky when the player could not have been certain it
//! was legal from what they had been told. The check runs against the table
//! as it stood before the play.
//!
//! A play is safe when:
//! - both color and rank were known, or
//! - the rank was known and every color the card could still be sits at the
//!   same stack height (or the whole table is level).

use crate::cards::Card;
use crate::rules::scoring::Table;

/// Whether playing `card` onto `table` was a gamble.
#[must_use]
pub fn is_risky_play(card: &Card, table: &Table) -> bool {
    if card.is_color_known() && card.is_rank_known() {
        return false;
    }

    let safe = card.is_rank_known() && (possible_colors_level(card, table) || table.is_level());
    !safe
}

/// Every color the card could still be shares one stack height.
///
/// An empty possible set never counts as level.
fn possible_colors_level(card: &Card, table: &Table) -> bool {
    let mut heights = card.possible_colors().iter().map(|&color| table.height(color));
    match heights.next() {
        Some(first) => heights.all(|h| h == first),
        None => false,
    }
}
