//! Card instances: an immutable face plus a mutable location.
//!
//! Every physical card of a match is one `Card`, identified by a `CardId`
//! assigned when the deck is generated. Rank, suit and id never change;
//! the engine only moves the card between locations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{Rank, Suit};
use crate::core::PlayerId;
use crate::zones::{Location, LocationType};

/// Unique identifier of a card within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A card of the match.
///
/// ```
/// use twenty_one::cards::{Card, CardId, Rank, Suit};
/// use twenty_one::zones::LocationType;
///
/// let card = Card::new(CardId::new(7), Rank::Queen, Suit::Hearts);
/// assert_eq!(card.location_type(), LocationType::Unused);
/// assert_eq!(card.player_index(), None);
/// assert_eq!(card.to_string(), "[  7] Q♥️ ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRecord", try_from = "CardRecord")]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,
    location: Location,
}

/// A card location field that disagrees with its `locationType`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("card {0} is in a player hand but lacks playerIndex or positionInLocation")]
    MissingOwner(CardId),
    #[error("card {0} has playerIndex or positionInLocation outside a player hand")]
    UnexpectedOwner(CardId),
}

/// Flat wire form of a card. The owner fields are always written, as
/// `null` when the card is not in a hand.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    id: CardId,
    rank: Rank,
    suit: Suit,
    location_type: LocationType,
    #[serde(default)]
    player_index: Option<PlayerId>,
    #[serde(default)]
    position_in_location: Option<u32>,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            rank: card.rank,
            suit: card.suit,
            location_type: card.location_type(),
            player_index: card.player_index(),
            position_in_location: card.position_in_location(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let owner = (record.player_index, record.position_in_location);
        let location = match (record.location_type, owner) {
            (LocationType::PlayerHand, (Some(player), Some(position))) => {
                Location::PlayerHand { player, position }
            }
            (LocationType::PlayerHand, _) => return Err(CardError::MissingOwner(record.id)),
            (LocationType::Unused, (None, None)) => Location::Unused,
            (LocationType::LastCardPlayed, (None, None)) => Location::LastCardPlayed,
            _ => return Err(CardError::UnexpectedOwner(record.id)),
        };
        Ok(Card::new(record.id, record.rank, record.suit).with_location(location))
    }
}

impl Card {
    /// Create a card in the unused pool.
    #[must_use]
    pub fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            location: Location::Unused,
        }
    }

    /// Same card placed at `location`.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn location_type(&self) -> LocationType {
        self.location.location_type()
    }

    /// Seat holding this card; `None` unless it is in a hand.
    #[must_use]
    pub fn player_index(&self) -> Option<PlayerId> {
        self.location.player()
    }

    /// Slot in the holder's hand; `None` unless it is in a hand.
    #[must_use]
    pub fn position_in_location(&self) -> Option<u32> {
        self.location.position()
    }

    #[must_use]
    pub fn is_unused(&self) -> bool {
        self.location == Location::Unused
    }

    #[must_use]
    pub fn is_held_by(&self, player: PlayerId) -> bool {
        self.player_index() == Some(player)
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    /// Whether this card may be played on top of `last_played`: same rank or same suit.
    #[must_use]
    pub fn is_compatible_with(&self, last_played: &Card) -> bool {
        self.rank == last_played.rank || self.suit == last_played.suit
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

/// `[ id] <rank><suit>`, padded so one- and two-character ranks line up.
/// The alternate form (`{:#}`) appends the location type and holder.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pad = if self.rank.symbol().len() == 1 { " " } else { "" };
        write!(f, "[{:>3}] {}{}{}", self.id.0, self.rank, self.suit, pad)?;
        if f.alternate() {
            write!(f, " {} ", self.location_type())?;
            if let Some(player) = self.player_index() {
                write!(f, "{}", player.0)?;
            }
        }
        Ok(())
    }
}
