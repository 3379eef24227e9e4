//! Perspective filtering.
//!
//! Hands are private. A seated player sees the unowned cards and their own
//! hand; spectators see everything.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// Who a card list is being prepared for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Viewer {
    Player(PlayerId),
    Spectator,
}

impl Viewer {
    /// Whether this viewer may see `card`.
    #[must_use]
    pub fn can_see(self, card: &Card) -> bool {
        match self {
            Viewer::Spectator => true,
            Viewer::Player(viewer) => card.player_index().map_or(true, |owner| owner == viewer),
        }
    }

    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Viewer::Player(p) => Some(p),
            Viewer::Spectator => None,
        }
    }
}

impl From<PlayerId> for Viewer {
    fn from(player: PlayerId) -> Self {
        Viewer::Player(player)
    }
}

/// Cards from `cards` that `viewer` may see: unowned ones and `viewer`'s
/// own hand, in input order.
///
/// ```
/// use twenty_one::cards::{Card, CardId, Rank, Suit};
/// use twenty_one::core::PlayerId;
/// use twenty_one::view::filter_for_viewer;
/// use twenty_one::zones::Location;
///
/// let mine = Card::new(CardId::new(0), Rank::Two, Suit::Clubs)
///     .with_location(Location::PlayerHand { player: PlayerId::new(0), position: 0 });
/// let theirs = Card::new(CardId::new(1), Rank::Nine, Suit::Hearts)
///     .with_location(Location::PlayerHand { player: PlayerId::new(1), position: 0 });
/// let pool = Card::new(CardId::new(2), Rank::King, Suit::Spades);
///
/// let seen = filter_for_viewer(&[mine.clone(), theirs, pool.clone()], PlayerId::new(0));
/// assert_eq!(seen, vec![mine, pool]);
/// ```
#[must_use]
pub fn filter_for_viewer(cards: &[Card], viewer: PlayerId) -> Vec<Card> {
    visible_to(cards, Viewer::Player(viewer))
}

/// Like [`filter_for_viewer`], for any viewer kind.
#[must_use]
pub fn visible_to(cards: &[Card], viewer: Viewer) -> Vec<Card> {
    cards.iter().filter(|c| viewer.can_see(c)).cloned().collect()
}

/// Every card of the match that `viewer` may see, in id order.
#[must_use]
pub fn visible_cards(state: &GameState, viewer: Viewer) -> Vec<Card> {
    state.cards().filter(|c| viewer.can_see(c)).cloned().collect()
}

/// Full card list for a viewer joining or starting a match.
///
/// Players get the cards they can see minus the unused pool. Spectators get
/// every card, pool included.
#[must_use]
pub fn initial_cards_for(state: &GameState, viewer: Viewer) -> Vec<Card> {
    match viewer {
        Viewer::Spectator => state.all_cards(),
        Viewer::Player(_) => state
            .cards()
            .filter(|c| !c.is_unused() && viewer.can_see(c))
            .cloned()
            .collect(),
    }
}
