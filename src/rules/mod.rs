//! Game rules: the engine trait and the evaluators it is built from.
//!
//! - `engine`: `RulesEngine`, action outcomes and rejection reasons
//! - `draw`: uniform selection from the unused pool
//! - `points`: hand point totals
//! - `winner`: win determination

pub mod draw;
pub mod engine;
pub mod points;
pub mod winner;

pub use draw::next_card_to_draw;
pub use engine::{ActionOutcome, GameResult, RejectReason, RulesEngine};
pub use points::{compute_player_points, hand_points};
pub use winner::{determine_winner, evaluate};
