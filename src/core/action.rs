//! Player actions and the action history.
//!
//! An action is a verb plus the seat submitting it. The transport layer maps
//! an authenticated connection to a seat and builds the `Action`; the engine
//! decides whether it is that seat's turn.
//!
//! ```
//! use twenty_one::core::{Action, ActionKind, PlayerId};
//!
//! let action: Action = serde_json::from_str(r#"{"action":"draw-card","playerIndex":1}"#).unwrap();
//! assert_eq!(action, Action::draw(PlayerId::new(1)));
//! assert_eq!(action.kind, ActionKind::DrawCard);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What a player wants to do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// Take a random unused card into the hand.
    DrawCard,
    /// Leave the turn rotation for the rest of the match.
    GiveUp,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::DrawCard => f.write_str("draw-card"),
            ActionKind::GiveUp => f.write_str("give-up"),
        }
    }
}

/// An action submitted on behalf of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "action")]
    pub kind: ActionKind,

    /// Seat the action is submitted for.
    #[serde(rename = "playerIndex")]
    pub player: PlayerId,
}

impl Action {
    #[must_use]
    pub fn new(kind: ActionKind, player: PlayerId) -> Self {
        Self { kind, player }
    }

    #[must_use]
    pub fn draw(player: PlayerId) -> Self {
        Self::new(ActionKind::DrawCard, player)
    }

    #[must_use]
    pub fn give_up(player: PlayerId) -> Self {
        Self::new(ActionKind::GiveUp, player)
    }
}

/// An accepted action, kept in the match history for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Value of `playCount` before this action was applied.
    pub sequence: u32,

    pub player: PlayerId,

    pub kind: ActionKind,
}

impl ActionRecord {
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self {
            sequence,
            player: action.player,
            kind: action.kind,
        }
    }

    /// The action this record was made from.
    #[must_use]
    pub fn action(&self) -> Action {
        Action::new(self.kind, self.player)
    }
}
