//! Twenty-one: draw toward the winning point without going over.
//!
//! - Every card starts in a shared unused pool
//! - On your turn: draw a random unused card OR give up
//! - Hitting the winning point exactly wins at once
//! - Going over busts you; once anyone busts or nobody is still drawing,
//!   the highest non-bust total wins
//!
//! Supports 1-255 players.

mod game;

pub use game::{TwentyOne, TwentyOneBuilder};
