//! Hint application and honesty checks.
//!
//! A tell names an attribute and a set of slots in the receiver's hand.
//! Applying it updates the receiver's knowledge:
//! - every named card collapses to the hinted value
//! - every other card drops the hinted value from its possible set
//!
//! The tell is then judged against the real hand. It must be *correct*
//! (every named card has the attribute) and *full* (the number of named
//! slots equals the number of cards with the attribute).

use serde::{Deserialize, Serialize};

use crate::cards::Hint;
use crate::zones::Hand;

/// Verdict on a tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintCheck {
    /// No named card lacks the attribute.
    pub correct: bool,
    /// Named slot count matches the number of cards with the attribute.
    pub full: bool,
}

impl HintCheck {
    /// Whether the hinter broke the rules. Note the polarity: `true` means
    /// the tell was dishonest or incomplete.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        !self.correct || !self.full
    }
}

/// Update the receiver's knowledge for a tell.
///
/// Positions must already be validated against `hand`; unknown positions
/// are skipped.
pub fn apply_hint(hand: &mut Hand, hint: Hint, positions: &[usize]) {
    for (position, card) in hand.iter_mut().enumerate() {
        if positions.contains(&position) {
            card.reveal(hint);
        } else {
            card.exclude(hint);
        }
    }
}

/// Judge a tell against the receiver's real hand.
///
/// Named slots are counted as given, so repeating a slot inflates the count.
#[must_use]
pub fn check_hint(hand: &Hand, hint: Hint, positions: &[usize]) -> HintCheck {
    let correct = positions
        .iter()
        .all(|&p| hand.get(p).is_some_and(|card| card.matches(hint)));
    let full = hand.count(|card| card.matches(hint)) == positions.len();

    HintCheck { correct, full }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Knowledge, Rank, RankDigit};

    fn hand(codes: &str) -> Hand {
        codes.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn rank(value: u8) -> Rank {
        Rank::new(value).unwrap()
    }

    #[test]
    fn test_partial_color_hint_is_not_full() {
        let h = hand("R1 G2 R3 B4 R5");
        let check = check_hint(&h, Hint::Color(Color::Red), &[0, 2]);

        assert!(check.correct);
        assert!(!check.full);
        assert!(check.is_forbidden());
    }

    #[test]
    fn test_complete_rank_hint_is_allowed() {
        let h = hand("R1 G3 B2 W4 Y5");
        let check = check_hint(&h, Hint::from(rank(3)), &[1]);

        assert_eq!(check, HintCheck { correct: true, full: true });
        assert!(!check.is_forbidden());
    }

    #[test]
    fn test_naming_wrong_card_is_incorrect() {
        let h = hand("R1 G3 B2 W4 Y5");
        let check = check_hint(&h, Hint::Color(Color::Green), &[0]);

        assert!(!check.correct);
        assert!(check.full);
        assert!(check.is_forbidden());
    }

    #[test]
    fn test_empty_hint_about_absent_attribute() {
        let h = hand("R1 G3 B2 W4 Y4");
        let check = check_hint(&h, Hint::from(rank(5)), &[]);

        assert!(!check.is_forbidden());
    }

    #[test]
    fn test_rank_no_card_can_have_is_incorrect() {
        let mut h = hand("R1 G3 B2 W4 Y5");
        let six = Hint::Rank(RankDigit::new(6).unwrap());
        apply_hint(&mut h, six, &[0]);
        let check = check_hint(&h, six, &[0]);

        assert!(!check.correct);
        assert!(!check.full);
        assert!(h.get(0).unwrap().is_rank_known());
    }

    #[test]
    fn test_repeated_slot_counts_twice() {
        let h = hand("R1 G3 B2 W4 Y4");
        let check = check_hint(&h, Hint::Color(Color::Red), &[0, 0]);

        assert!(check.correct);
        assert!(!check.full);
    }

    #[test]
    fn test_apply_rank_hint() {
        let mut h = hand("R1 G3 B2 W4 Y5");
        apply_hint(&mut h, Hint::from(rank(3)), &[1]);

        let named = h.get(1).unwrap();
        assert_eq!(named.knowledge(), Knowledge::RankKnown);
        assert_eq!(named.possible_ranks().len(), 1);
        assert!(named.possible_ranks().contains(&rank(3)));

        for p in [0, 2, 3, 4] {
            let other = h.get(p).unwrap();
            assert!(!other.possible_ranks().contains(&rank(3)));
            assert_eq!(other.possible_ranks().len(), 4);
            assert_eq!(other.possible_colors().len(), 5);
        }
    }

    #[test]
    fn test_apply_color_hint_narrows_others() {
        let mut h = hand("R1 G3 R2 W4 Y5");
        apply_hint(&mut h, Hint::Color(Color::Red), &[0, 2]);

        assert!(h.get(0).unwrap().is_color_known());
        assert!(h.get(2).unwrap().is_color_known());
        assert!(!h.get(1).unwrap().possible_colors().contains(&Color::Red));
        assert!(!h.get(1).unwrap().is_color_known());
    }
}
