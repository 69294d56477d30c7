//! Hanabi game implementation.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hint};
use crate::core::{Command, CommandRecord, GameConfig, GameError, Player, PlayerId, PlayerMap};
use crate::rules::{
    apply_hint, check_hint, check_termination, is_risky_play, GameSummary, RulesEngine, Table,
    Termination, TerminationInput,
};
use crate::zones::{Deck, Hand};

/// Authoritative state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HanabiGame {
    config: GameConfig,
    table: Table,
    deck: Deck,
    players: PlayerMap<Player>,
    current: PlayerId,

    /// Turns started so far.
    turn: u32,
    cards_played: u32,
    risky_plays: u32,

    /// Set by `end_game` or `declare_finished`.
    finished: bool,

    history: Vec<CommandRecord>,
}

/// Builder for creating a HanabiGame.
#[derive(Clone, Debug, Default)]
pub struct HanabiGameBuilder {
    config: GameConfig,
}

impl HanabiGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    /// Deal from space-separated card codes.
    ///
    /// The first `hand_size` cards go to Player 0, the next `hand_size` to
    /// Player 1, and so on; the rest become the deck in order.
    pub fn deal(self, cards: &str) -> Result<HanabiGame, GameError> {
        let deck = Deck::parse(cards)?;
        self.build(deck)
    }

    /// Build the game from an ordered deck, dealing hands off its front.
    pub fn build(self, mut deck: Deck) -> Result<HanabiGame, GameError> {
        self.config.validate()?;

        let needed = self.config.dealt_cards();
        if deck.len() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                found: deck.len(),
            });
        }

        let hand_size = self.config.hand_size;
        let players = PlayerMap::new(self.config.player_count, |_| {
            let hand: Hand = std::iter::from_fn(|| deck.draw()).take(hand_size).collect();
            Player::new(hand)
        });

        log::info!(
            "new game: {} players, {} cards in deck",
            players.player_count(),
            deck.len()
        );

        Ok(HanabiGame {
            config: self.config,
            table: Table::new(),
            deck,
            players,
            current: PlayerId::new(0),
            turn: 0,
            cards_played: 0,
            risky_plays: 0,
            finished: false,
            history: Vec::new(),
        })
    }
}

impl HanabiGame {
    /// Standard two-player game from a deal string.
    pub fn from_deck_string(cards: &str) -> Result<Self, GameError> {
        HanabiGameBuilder::new().deal(cards)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn cards_played(&self) -> u32 {
        self.cards_played
    }

    pub fn risky_plays(&self) -> u32 {
        self.risky_plays
    }

    /// Commands processed so far, oldest first.
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// The seat that receives the current player's tells.
    pub fn hint_receiver(&self) -> PlayerId {
        self.current.next(self.config.player_count)
    }

    /// Force the game to end at the next termination check.
    pub fn declare_finished(&mut self) {
        self.finished = true;
    }

    /// Current counters as a report.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turn: self.turn,
            cards_played: self.cards_played,
            risky_plays: self.risky_plays,
        }
    }

    /// Play the card at `position` from the current player's hand.
    ///
    /// Returns `true` if the card did not fit its stack. The card is gone
    /// either way and a replacement is drawn.
    pub fn play_card(&mut self, position: usize) -> Result<bool, GameError> {
        let card = self.take_card(position)?;

        if !self.table.accepts(&card) {
            log::debug!(
                "{} played {} onto stack {}",
                self.current,
                card,
                self.table.height(card.color())
            );
            return Ok(true);
        }

        if is_risky_play(&card, &self.table) {
            self.risky_plays += 1;
            log::debug!("{} played {} with risk", self.current, card);
        } else {
            log::debug!("{} played {}", self.current, card);
        }

        self.table.advance(card.color());
        self.cards_played += 1;
        Ok(false)
    }

    /// Discard the card at `position` from the current player's hand.
    pub fn drop_card(&mut self, position: usize) -> Result<(), GameError> {
        let card = self.take_card(position)?;
        log::debug!("{} dropped {}", self.current, card);
        Ok(())
    }

    /// Tell the next seat which of its cards carry `hint`.
    ///
    /// Knowledge is updated before the tell is judged, so a dishonest tell
    /// still misleads. Returns `true` if the tell was incorrect or incomplete.
    pub fn tell(&mut self, hint: Hint, positions: &[usize]) -> Result<bool, GameError> {
        let receiver = self.hint_receiver();
        let hand = &mut self.players[receiver].hand;
        for &position in positions {
            hand.check_position(position)?;
        }

        apply_hint(hand, hint, positions);
        let check = check_hint(hand, hint, positions);

        log::debug!(
            "{} told {} {} at {:?} (correct: {}, full: {})",
            self.current,
            receiver,
            hint,
            positions,
            check.correct,
            check.full
        );
        Ok(check.is_forbidden())
    }

    /// Remove a card from the current hand and draw its replacement.
    fn take_card(&mut self, position: usize) -> Result<Card, GameError> {
        let hand = &mut self.players[self.current].hand;
        hand.check_position(position)?;

        let replacement = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        hand.replace(position, replacement)
    }
}

impl RulesEngine for HanabiGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_player(&self) -> PlayerId {
        self.current
    }

    fn start_turn(&mut self) {
        self.turn += 1;
    }

    fn process_turn(&mut self, command: &Command) -> Result<bool, GameError> {
        let forbidden = match command {
            Command::PlayCard { position } => self.play_card(*position)?,
            Command::DropCard { position } => {
                self.drop_card(*position)?;
                false
            }
            Command::TellColor { color, positions } => self.tell(Hint::Color(*color), positions)?,
            Command::TellRank { rank, positions } => self.tell(Hint::Rank(*rank), positions)?,
        };

        if forbidden {
            log::warn!("{} made a forbidden move: {}", self.current, command);
            self.players[self.current].mark_forbidden();
        }

        self.history.push(CommandRecord::new(
            self.current,
            command.clone(),
            self.turn,
            forbidden,
        ));
        Ok(forbidden)
    }

    fn termination(&self) -> Option<Termination> {
        check_termination(TerminationInput {
            declared: self.finished,
            deck_len: self.deck.len(),
            cards_played: self.cards_played as usize,
            max_score: self.config.max_score(),
            players: &self.players,
        })
    }

    fn end_turn(&mut self) {
        self.current = self.current.next(self.config.player_count);
    }

    fn end_game(&mut self) -> GameSummary {
        let summary = self.summary();
        if !self.finished {
            log::info!("game over: {}", summary);
        }
        self.finished = true;
        summary
    }
}
