//! Seat rotation tests for games with more than two players.
//!
//! These check that turn order and tells follow the seat ring and that no
//! part of the engine assumes exactly two seats.

use hanabi_judge::cards::{Color, Knowledge, Rank};
use hanabi_judge::core::{Command, GameError, PlayerId};
use hanabi_judge::games::hanabi::{HanabiGame, HanabiGameBuilder};
use hanabi_judge::rules::{RulesEngine, Termination, TurnOutcome};

/// P0: all 1s, P1: all 2s, P2: all 3s, deck: all 4s
const THREE_SEATS: &str = "R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3 G3 B3 W3 Y3 R4 G4 B4 W4 Y4";

fn three_player_game() -> HanabiGame {
    HanabiGameBuilder::new()
        .player_count(3)
        .deal(THREE_SEATS)
        .unwrap()
}

fn rank(value: u8) -> Rank {
    Rank::new(value).unwrap()
}

/// Test that the deal fills every seat in order.
#[test]
fn test_deal_for_each_seat() {
    for player_count in [2, 3, 4] {
        let cards = vec!["W5"; player_count * 5 + 1].join(" ");
        let game = HanabiGameBuilder::new()
            .player_count(player_count)
            .deal(&cards)
            .unwrap();

        assert_eq!(game.players().player_count(), player_count);
        for player in PlayerId::all(player_count) {
            assert_eq!(game.player(player).hand.len(), 5);
        }
        assert_eq!(game.deck().len(), 1);
    }
}

/// Test that a short deal reports how many cards the seats need.
#[test]
fn test_deal_needs_cards_for_every_seat() {
    // Four seats take every card, leaving an empty deck.
    let game = HanabiGameBuilder::new().player_count(4).deal(THREE_SEATS).unwrap();
    assert!(game.deck().is_empty());

    let result = HanabiGameBuilder::new().player_count(5).deal(THREE_SEATS);
    assert_eq!(
        result.map(|_| ()),
        Err(GameError::NotEnoughCards { needed: 25, found: 20 })
    );
}

/// Test that a single seat is rejected.
#[test]
fn test_single_player_rejected() {
    let result = HanabiGameBuilder::new().player_count(1).deal(THREE_SEATS);
    assert!(matches!(result, Err(GameError::Config(_))));
}

/// Test that tells go around the ring and wrap back to seat 0.
#[test]
fn test_tells_follow_seat_ring() {
    let mut game = three_player_game();

    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.hint_receiver(), PlayerId::new(1));
    game.play_turn(&Command::tell_rank(rank(2), &[0, 1, 2, 3, 4]))
        .unwrap();

    assert_eq!(game.hint_receiver(), PlayerId::new(2));
    game.play_turn(&Command::tell_color(Color::Red, &[0])).unwrap();

    assert_eq!(game.current_player(), PlayerId::new(2));
    assert_eq!(game.hint_receiver(), PlayerId::new(0));
    game.play_turn(&Command::tell_rank(rank(1), &[0, 1, 2, 3, 4]))
        .unwrap();

    assert_eq!(game.current_player(), PlayerId::new(0));
    assert!(game
        .player(PlayerId::new(0))
        .hand
        .iter()
        .all(|card| card.is_rank_known()));
    assert!(game
        .player(PlayerId::new(1))
        .hand
        .iter()
        .all(|card| card.knowledge() == Knowledge::RankKnown));

    let p2 = &game.player(PlayerId::new(2)).hand;
    assert_eq!(p2.get(0).unwrap().knowledge(), Knowledge::ColorKnown);
    assert_eq!(p2.get(1).unwrap().knowledge(), Knowledge::Unknown);

    for player in PlayerId::all(3) {
        assert!(!game.player(player).made_forbidden_move());
    }

    // Seat 0 knows its first card is a 1 and the table is level.
    game.play_turn(&Command::PlayCard { position: 0 }).unwrap();
    assert_eq!(game.cards_played(), 1);
    assert_eq!(game.risky_plays(), 0);
}

/// Test that the last seat's forbidden move ends the game.
#[test]
fn test_forbidden_move_by_last_seat() {
    let mut game = three_player_game();

    let commands = [
        Command::PlayCard { position: 0 }, // R1
        Command::PlayCard { position: 0 }, // R2
        Command::PlayCard { position: 1 }, // G3 onto an empty stack
    ];

    let mut outcome = None;
    for command in &commands {
        outcome = Some(game.play_turn(command).unwrap());
    }

    match outcome {
        Some(TurnOutcome::Ended { summary, reason }) => {
            assert_eq!(reason, Termination::ForbiddenMove(PlayerId::new(2)));
            assert_eq!(summary.turn, 3);
            assert_eq!(summary.cards_played, 2);
        }
        other => panic!("expected the game to end, got {:?}", other),
    }
    assert_eq!(game.history().len(), 3);
    assert!(game.history()[2].forbidden);
}
