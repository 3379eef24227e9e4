//! What each client is allowed to see.

pub mod perspective;
pub mod snapshot;

pub use perspective::{filter_for_viewer, initial_cards_for, visible_cards, visible_to, Viewer};
pub use snapshot::TableSnapshot;
