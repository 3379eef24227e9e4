//! Hand point evaluation.

use crate::cards::Card;
use crate::core::{GameState, PlayerId};
use crate::zones;

/// Sum of the point values of `hand`.
///
/// ```
/// use twenty_one::cards::{Card, CardId, Rank, Suit};
/// use twenty_one::rules::hand_points;
///
/// let hand = [
///     Card::new(CardId::new(0), Rank::Ace, Suit::Spades),
///     Card::new(CardId::new(1), Rank::King, Suit::Hearts),
///     Card::new(CardId::new(2), Rank::Seven, Suit::Clubs),
/// ];
/// assert_eq!(hand_points(&hand), 18);
/// ```
pub fn hand_points<'a>(hand: impl IntoIterator<Item = &'a Card>) -> u32 {
    hand.into_iter().map(Card::points).sum()
}

/// Point total of `player`'s current hand, computed from scratch.
#[must_use]
pub fn compute_player_points(state: &GameState, player: PlayerId) -> u32 {
    hand_points(zones::cards_held_by(state.cards(), player))
}
