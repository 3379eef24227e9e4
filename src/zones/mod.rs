//! Card locations.
//!
//! A card is either in the shared unused pool, face up as the last card
//! played, or in exactly one player's hand at a fixed slot.
//!
//! ## Key Types
//!
//! - `Location`: placement of a card, with owner and slot for hands
//! - `LocationType`: placement category only
//! - query functions: hands, hand sizes, pool contents

pub mod location;
pub mod queries;

pub use location::{Location, LocationType};
pub use queries::{
    cards_held_by, count_in, hand_sizes, last_played_card, next_hand_position, unused_card_ids,
};
