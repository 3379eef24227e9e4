//! Deck generation.
//!
//! The deck is `number_of_decks` copies of the catalog, each copy holding
//! every suit crossed with the first `rank_limit` ranks. Ids come from a
//! single counter in (deck, suit, rank) order.

use super::definition::{ALL_RANKS, ALL_SUITS};
use super::instance::{Card, CardId};
use crate::core::GameConfig;

/// Build every card of a match, all in the unused pool.
///
/// ```
/// use twenty_one::cards::{build_deck, Rank};
/// use twenty_one::core::GameConfig;
///
/// let deck = build_deck(&GameConfig::new().with_decks(1).with_rank_limit(2));
/// assert_eq!(deck.len(), 8);
/// assert!(deck.iter().all(|c| c.rank() <= Rank::Two));
/// ```
#[must_use]
pub fn build_deck(config: &GameConfig) -> Vec<Card> {
    let ranks = &ALL_RANKS[..config.effective_rank_limit()];
    let mut cards = Vec::with_capacity(config.deck_size());
    let mut next_id = 0u32;

    for _ in 0..config.number_of_decks {
        for &suit in &ALL_SUITS {
            for &rank in ranks {
                cards.push(Card::new(CardId::new(next_id), rank, suit));
                next_id += 1;
            }
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn test_size_is_decks_times_suits_times_ranks() {
        for (decks, ranks) in [(1, 13), (2, 10), (5, 13), (3, 1)] {
            let config = GameConfig::new().with_decks(decks).with_rank_limit(ranks);
            assert_eq!(build_deck(&config).len(), decks as usize * 4 * ranks as usize);
        }
    }

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let deck = build_deck(&GameConfig::new().with_decks(2));
        let ids: HashSet<_> = deck.iter().map(|c| c.id()).collect();

        assert_eq!(ids.len(), deck.len());
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id(), CardId::new(i as u32));
        }
    }

    #[test]
    fn test_catalog_order() {
        let deck = build_deck(&GameConfig::new().with_decks(1).with_rank_limit(3));

        assert_eq!((deck[0].rank(), deck[0].suit()), (Rank::Ace, Suit::Diamonds));
        assert_eq!((deck[2].rank(), deck[2].suit()), (Rank::Three, Suit::Diamonds));
        assert_eq!((deck[3].rank(), deck[3].suit()), (Rank::Ace, Suit::Hearts));
        assert_eq!((deck[11].rank(), deck[11].suit()), (Rank::Three, Suit::Spades));
    }

    #[test]
    fn test_all_cards_start_unused() {
        let deck = build_deck(&GameConfig::default());
        assert!(deck.iter().all(Card::is_unused));
    }

    #[test]
    fn test_zero_decks_is_empty() {
        assert!(build_deck(&GameConfig::new().with_decks(0)).is_empty());
    }
}
