//! Draw selection.
//!
//! Drawing picks uniformly among the cards still in the unused pool, which is
//! equivalent to drawing from a deck that is reshuffled before every draw.

use crate::cards::CardId;
use crate::core::{DrawRng, GameState};

/// Pick the next card to draw, or `None` when the pool is empty.
///
/// Does not move the card.
pub fn next_card_to_draw<R: DrawRng + ?Sized>(state: &GameState, rng: &mut R) -> Option<CardId> {
    let unused = state.unused_card_ids();
    if unused.is_empty() {
        return None;
    }
    Some(unused[rng.pick_index(unused.len())])
}
