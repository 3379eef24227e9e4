//! Card system: faces, instances and deck generation.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: the immutable face of a card
//! - `CardId`: identity assigned at deck generation
//! - `Card`: a face plus its current location
//! - `build_deck`: the card catalog for a `GameConfig`

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::build_deck;
pub use definition::{Rank, Suit, ALL_RANKS, ALL_SUITS, RANK_COUNT};
pub use instance::{Card, CardError, CardId};
