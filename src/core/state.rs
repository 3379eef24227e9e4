//! Match state.
//!
//! `GameState` is the single mutable aggregate of a match: the seats, every
//! card and its location, turn order, per-player status and points, and the
//! outcome. It is created once per match and then only changed by the rules
//! engine. Starting a new match means building a new `GameState`.
//!
//! The card map is an `im::OrdMap` keyed by id: iteration order is stable
//! (so seeded draws are reproducible) and cloning a snapshot is O(1).
//!
//! On the wire the state uses the field names clients already know
//! (`cardsById`, `currentTurnPlayerIndex`, `playerStates`, ...).

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Write as _;
use thiserror::Error;

use super::action::ActionRecord;
use super::config::{ConfigError, GameConfig};
use super::player::{PlayerId, PlayerMap, PlayerStatus};
use crate::cards::{build_deck, Card, CardId};
use crate::zones::{self, Location, LocationType};

/// Match-level phase. `GameOver` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    #[default]
    Play,
    GameOver,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::Play => "play",
            GamePhase::GameOver => "game-over",
        })
    }
}

/// A deserialized state that the engine could not safely act on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("invalid seats: {0}")]
    Seats(String),
    #[error("{field} has {len} entries for {players} players")]
    SeatCountMismatch { field: &'static str, len: usize, players: usize },
    #[error("{field} names seat {seat} but the table has {players} players")]
    SeatOutOfRange { field: &'static str, seat: u8, players: usize },
    #[error("winner {0} is set while the game is still in play")]
    WinnerWhilePlaying(u8),
    #[error("card stored under id {key} is card {id}")]
    CardKeyMismatch { key: CardId, id: CardId },
    #[error("seat {seat} holds two cards in slot {position}")]
    DuplicateHandSlot { seat: u8, position: u32 },
}

impl From<ConfigError> for StateError {
    fn from(err: ConfigError) -> Self {
        StateError::Seats(err.to_string())
    }
}

/// Full state of one match, including every hidden hand.
///
/// Deserialization checks that every seat reference fits the table, so a
/// stored state can be handed straight back to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    #[serde(rename = "playerNames")]
    player_names: Vec<String>,

    #[serde(rename = "cardsById")]
    cards: OrdMap<CardId, Card>,

    /// Seat whose turn it is.
    #[serde(rename = "currentTurnPlayerIndex")]
    pub current_player: PlayerId,

    pub phase: GamePhase,

    /// Number of accepted actions so far.
    #[serde(rename = "playCount")]
    pub play_count: u32,

    #[serde(rename = "playerStates")]
    pub player_states: PlayerMap<PlayerStatus>,

    /// Hand totals, refreshed after every draw.
    pub points: PlayerMap<u32>,

    /// Set only once `phase` is `GameOver`; stays `None` if the match ended
    /// without a winner.
    pub winner: Option<PlayerId>,

    #[serde(rename = "winningPoint")]
    pub winning_point: u32,

    /// Accepted actions in order.
    #[serde(rename = "actionHistory")]
    pub action_history: Vector<ActionRecord>,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    #[serde(rename = "playerNames")]
    player_names: Vec<String>,
    #[serde(rename = "cardsById")]
    cards: OrdMap<CardId, Card>,
    #[serde(rename = "currentTurnPlayerIndex")]
    current_player: PlayerId,
    phase: GamePhase,
    #[serde(rename = "playCount")]
    play_count: u32,
    #[serde(rename = "playerStates")]
    player_states: PlayerMap<PlayerStatus>,
    points: PlayerMap<u32>,
    winner: Option<PlayerId>,
    #[serde(rename = "winningPoint")]
    winning_point: u32,
    #[serde(rename = "actionHistory", default)]
    action_history: Vector<ActionRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let players = raw.player_names.len();
        GameConfig::validate_players(players)?;

        let check_seat = |field: &'static str, player: PlayerId| {
            if player.index() < players {
                Ok(())
            } else {
                Err(StateError::SeatOutOfRange { field, seat: player.0, players })
            }
        };

        for (field, len) in [
            ("playerStates", raw.player_states.player_count()),
            ("points", raw.points.player_count()),
        ] {
            if len != players {
                return Err(StateError::SeatCountMismatch { field, len, players });
            }
        }

        check_seat("currentTurnPlayerIndex", raw.current_player)?;
        if let Some(winner) = raw.winner {
            check_seat("winner", winner)?;
            if raw.phase == GamePhase::Play {
                return Err(StateError::WinnerWhilePlaying(winner.0));
            }
        }

        let mut slots = HashSet::new();
        for (key, card) in raw.cards.iter() {
            if *key != card.id() {
                return Err(StateError::CardKeyMismatch { key: *key, id: card.id() });
            }
            if let Location::PlayerHand { player, position } = card.location() {
                check_seat("cardsById", player)?;
                if !slots.insert((player, position)) {
                    return Err(StateError::DuplicateHandSlot { seat: player.0, position });
                }
            }
        }

        Ok(Self {
            player_names: raw.player_names,
            cards: raw.cards,
            current_player: raw.current_player,
            phase: raw.phase,
            play_count: raw.play_count,
            player_states: raw.player_states,
            points: raw.points,
            winner: raw.winner,
            winning_point: raw.winning_point,
            action_history: raw.action_history,
        })
    }
}

impl GameState {
    /// Create a fresh match: every card unused, seat 0 to act.
    ///
    /// ```
    /// use twenty_one::core::{GameConfig, GamePhase, GameState};
    ///
    /// let config = GameConfig::new().with_decks(1).with_rank_limit(5);
    /// let state = GameState::new(["ann", "bo"], &config).unwrap();
    ///
    /// assert_eq!(state.deck_size(), 20);
    /// assert_eq!(state.unused_count(), 20);
    /// assert_eq!(state.phase, GamePhase::Play);
    /// assert_eq!(state.winner, None);
    /// ```
    pub fn new<I, S>(player_names: I, config: &GameConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = player_names.into_iter().map(Into::into).collect();
        GameConfig::validate_players(player_names.len())?;

        let player_count = player_names.len();
        let cards = build_deck(config)
            .into_iter()
            .map(|card| (card.id(), card))
            .collect();

        Ok(Self {
            player_names,
            cards,
            current_player: PlayerId::new(0),
            phase: GamePhase::Play,
            play_count: 0,
            player_states: PlayerMap::with_default(player_count),
            points: PlayerMap::with_value(player_count, 0),
            winner: None,
            winning_point: config.winning_point,
            action_history: Vector::new(),
        })
    }

    // === Seats ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Seat of the player with the given name.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<PlayerId> {
        self.player_names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId::new(i as u8))
    }

    #[must_use]
    pub fn status(&self, player: PlayerId) -> Option<PlayerStatus> {
        self.player_states.get(player).copied()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    // === Cards ===

    /// Every card, in id order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Owned copy of every card, for a full-table broadcast.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.cards.values().cloned().collect()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn unused_count(&self) -> usize {
        zones::count_in(self.cards(), LocationType::Unused)
    }

    /// Ids of the cards still in the draw pool, in id order.
    #[must_use]
    pub fn unused_card_ids(&self) -> Vec<CardId> {
        zones::unused_card_ids(self.cards())
    }

    // === Introspection ===

    /// A player's hand in insertion order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<&Card> {
        zones::cards_held_by(self.cards(), player)
    }

    /// Number of cards each seat holds.
    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        zones::hand_sizes(self.cards(), self.player_count())
    }

    /// Seats holding two cards or fewer.
    #[must_use]
    pub fn players_with_few_cards(&self) -> Vec<PlayerId> {
        self.hand_sizes()
            .iter()
            .filter(|(_, &size)| size <= 2)
            .map(|(player, _)| player)
            .collect()
    }

    /// Stored point total of a player (as of their last draw).
    #[must_use]
    pub fn player_points(&self, player: PlayerId) -> Option<u32> {
        self.points.get(player).copied()
    }

    /// The face-up discard, if any.
    #[must_use]
    pub fn last_played_card(&self) -> Option<&Card> {
        zones::last_played_card(self.cards())
    }

    // === Mutation (rules engine only) ===

    /// Move a card to the end of a player's hand. Returns the updated card.
    pub(crate) fn move_to_hand(&mut self, id: CardId, player: PlayerId) -> Option<Card> {
        let position = zones::next_hand_position(self.cards(), player);
        let card = self.cards.get_mut(&id)?;
        card.set_location(Location::PlayerHand { player, position });
        Some(card.clone())
    }

    // === Debug output ===

    /// Human-readable table: a header line, then one line per seat.
    ///
    /// ```text
    /// #3 play
    /// ann: [  4] 5♦️  [ 17] 3♣️   *TURN*
    /// bo: [  9] K♥️
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("#{} {}", self.play_count, self.phase);
        if let Some(card) = self.last_played_card() {
            let _ = write!(out, " {}", card);
        }
        out.push('\n');

        for (i, name) in self.player_names.iter().enumerate() {
            let player = PlayerId::new(i as u8);
            let hand: Vec<String> = self.hand(player).iter().map(|c| c.to_string()).collect();
            let _ = write!(out, "{}: {}", name, hand.join(" "));
            if player == self.current_player && !self.is_over() {
                out.push_str("  *TURN*");
            }
            out.push('\n');
        }

        out
    }
}
