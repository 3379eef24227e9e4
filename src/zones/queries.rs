//! Location queries over a set of cards.
//!
//! All functions take any iterator of cards so they work on the full card
//! map as well as on a filtered view.

use crate::cards::{Card, CardId};
use crate::core::{PlayerId, PlayerMap};

use super::location::{Location, LocationType};

/// Cards held by `player`, sorted by hand slot.
pub fn cards_held_by<'a>(cards: impl IntoIterator<Item = &'a Card>, player: PlayerId) -> Vec<&'a Card> {
    let mut hand: Vec<&Card> = cards.into_iter().filter(|c| c.is_held_by(player)).collect();
    hand.sort_by_key(|c| c.position_in_location());
    hand
}

/// Slot for the next card entering `player`'s hand: one past the highest
/// slot in use, or 0 for an empty hand.
pub fn next_hand_position<'a>(cards: impl IntoIterator<Item = &'a Card>, player: PlayerId) -> u32 {
    cards
        .into_iter()
        .filter_map(|c| match c.location() {
            Location::PlayerHand { player: p, position } if p == player => Some(position),
            _ => None,
        })
        .max()
        .map_or(0, |highest| highest + 1)
}

/// Hand size of every seat. Cards claiming a seat outside the table are ignored.
pub fn hand_sizes<'a>(cards: impl IntoIterator<Item = &'a Card>, player_count: usize) -> PlayerMap<usize> {
    let mut sizes = PlayerMap::with_value(player_count, 0);
    for player in cards.into_iter().filter_map(Card::player_index) {
        if let Some(size) = sizes.get_mut(player) {
            *size += 1;
        }
    }
    sizes
}

pub fn count_in<'a>(cards: impl IntoIterator<Item = &'a Card>, location_type: LocationType) -> usize {
    cards
        .into_iter()
        .filter(|c| c.location_type() == location_type)
        .count()
}

pub fn unused_card_ids<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<CardId> {
    cards
        .into_iter()
        .filter(|c| c.is_unused())
        .map(Card::id)
        .collect()
}

pub fn last_played_card<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<&'a Card> {
    cards
        .into_iter()
        .find(|c| c.location_type() == LocationType::LastCardPlayed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn held(id: u32, player: u8, position: u32) -> Card {
        Card::new(CardId::new(id), Rank::Two, Suit::Clubs).with_location(Location::PlayerHand {
            player: PlayerId::new(player),
            position,
        })
    }

    fn unused(id: u32) -> Card {
        Card::new(CardId::new(id), Rank::Ace, Suit::Hearts)
    }

    #[test]
    fn test_cards_held_by_sorts_by_slot() {
        let cards = vec![held(0, 0, 2), unused(1), held(2, 0, 0), held(3, 1, 0), held(4, 0, 1)];
        let hand: Vec<_> = cards_held_by(&cards, PlayerId::new(0)).iter().map(|c| c.id().0).collect();
        assert_eq!(hand, vec![2, 4, 0]);
    }

    #[test]
    fn test_next_hand_position() {
        let cards = vec![held(0, 0, 0), held(1, 0, 4), held(2, 1, 7), unused(3)];
        assert_eq!(next_hand_position(&cards, PlayerId::new(0)), 5);
        assert_eq!(next_hand_position(&cards, PlayerId::new(1)), 8);
        assert_eq!(next_hand_position(&cards, PlayerId::new(2)), 0);
    }

    #[test]
    fn test_hand_sizes() {
        let cards = vec![held(0, 0, 0), held(1, 0, 1), held(2, 2, 0), unused(3), held(4, 9, 0)];
        assert_eq!(hand_sizes(&cards, 3).as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_pool_queries() {
        let discard = unused(5).with_location(Location::LastCardPlayed);
        let cards = vec![unused(0), held(1, 0, 0), discard.clone(), unused(3)];

        assert_eq!(unused_card_ids(&cards), vec![CardId::new(0), CardId::new(3)]);
        assert_eq!(count_in(&cards, LocationType::Unused), 2);
        assert_eq!(count_in(&cards, LocationType::PlayerHand), 1);
        assert_eq!(last_played_card(&cards), Some(&discard));
        assert_eq!(last_played_card(&cards[..2]), None);
    }
}
