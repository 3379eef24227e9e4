//! Where a card currently is.
//!
//! Ownership is encoded in the enum itself: only `PlayerHand` carries a seat
//! and a slot, so "owned ⇔ in a hand ⇔ has a slot" cannot be violated.
//! Standing alone, a location serializes as `locationType` plus
//! `playerIndex` and `positionInLocation` for cards held in a hand. Inside
//! a card the owner fields are always present and `null` outside a hand.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Placement of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "locationType", rename_all = "kebab-case")]
pub enum Location {
    /// In the shared draw pool.
    #[default]
    Unused,
    /// Face-up discard everyone can see. Reserved; no current action puts a card here.
    LastCardPlayed,
    /// Held privately by a player.
    PlayerHand {
        #[serde(rename = "playerIndex")]
        player: PlayerId,
        /// Zero-based insertion slot, unique within the hand.
        #[serde(rename = "positionInLocation")]
        position: u32,
    },
}

/// Location category without owner details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    Unused,
    LastCardPlayed,
    PlayerHand,
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LocationType::Unused => "unused",
            LocationType::LastCardPlayed => "last-card-played",
            LocationType::PlayerHand => "player-hand",
        })
    }
}

impl Location {
    #[must_use]
    pub fn location_type(self) -> LocationType {
        match self {
            Location::Unused => LocationType::Unused,
            Location::LastCardPlayed => LocationType::LastCardPlayed,
            Location::PlayerHand { .. } => LocationType::PlayerHand,
        }
    }

    /// Seat holding the card, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Location::PlayerHand { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Slot within the holder's hand, if any.
    #[must_use]
    pub fn position(self) -> Option<u32> {
        match self {
            Location::PlayerHand { position, .. } => Some(position),
            _ => None,
        }
    }
}
