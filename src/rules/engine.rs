//! Rules engine trait and action outcomes.
//!
//! A rules engine validates and applies actions to a `GameState` it does not
//! own. Every call either applies the whole action or leaves the state
//! untouched, and reports which of the two happened through `ActionOutcome`.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{Action, ActionKind, GameConfig, GameState, PlayerId};

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerId),
    /// The match ended without anyone qualifying (every player gave up
    /// without scoring).
    NoWinner,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Why an action had no effect.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RejectReason {
    #[error("the game is already over")]
    GameOver,
    #[error("it's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: u8, actual: u8 },
    #[error("no unused cards left to draw")]
    DeckExhausted,
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Applied; these cards moved.
    Accepted(Vec<Card>),
    /// Applied without moving any card (e.g. giving up).
    AcceptedNoChanges,
    /// Not applied; the state is unchanged.
    Rejected(RejectReason),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ActionOutcome::Rejected(_))
    }

    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            ActionOutcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Cards that moved; empty for rejections and card-less actions.
    #[must_use]
    pub fn changed_cards(&self) -> &[Card] {
        match self {
            ActionOutcome::Accepted(cards) => cards,
            _ => &[],
        }
    }

    #[must_use]
    pub fn into_changed_cards(self) -> Vec<Card> {
        match self {
            ActionOutcome::Accepted(cards) => cards,
            _ => Vec::new(),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must leave the state untouched when it rejects
/// - `is_terminal` returns `None` while the match continues
/// - `apply` is the plain transport contract: changed cards, empty when
///   nothing moved or the action was rejected
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// Create a fresh match for the given seats.
    fn create_game(&self, player_names: &[&str]) -> Result<GameState, crate::core::ConfigError> {
        GameState::new(player_names.iter().copied(), self.config())
    }

    /// Actions `player` could submit right now. Empty if they can't act.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<ActionKind>;

    /// Validate and apply one action.
    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> ActionOutcome;

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Apply an action and return the cards it moved.
    fn apply(&mut self, state: &mut GameState, action: &Action) -> Vec<Card> {
        self.apply_action(state, action).into_changed_cards()
    }
}
