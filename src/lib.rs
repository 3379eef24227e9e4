//! # twenty-one
//!
//! Authoritative rules engine for a hidden-hand card game where players draw
//! toward a winning point without going over it.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: A `GameState` belongs to one match and is passed
//!    to the engine on every call. No globals; many matches can run at once.
//!
//! 2. **Locations By Construction**: A card's location is a single enum, so a
//!    card is either unowned or in exactly one seat's hand at one position.
//!
//! 3. **Injectable Randomness**: Draws go through `DrawRng`. Seeded engines
//!    replay identically.
//!
//! 4. **Rejections Are Values**: Invalid actions leave the state untouched
//!    and say why through `ActionOutcome::Rejected`.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, actions, RNG, game state
//! - `cards`: Ranks, suits, card instances, deck generation
//! - `zones`: Card locations and location queries
//! - `rules`: `RulesEngine` trait, draw selection, point and win evaluation
//! - `games`: The `TwentyOne` engine
//! - `view`: Per-viewer card filtering and the public table snapshot
//!
//! ## Example
//!
//! ```
//! use twenty_one::{Action, PlayerId, RulesEngine, TwentyOneBuilder};
//!
//! let (mut game, mut state) = TwentyOneBuilder::new()
//!     .decks(1)
//!     .rank_limit(5)
//!     .build(&["ann", "bo"], 42)
//!     .unwrap();
//!
//! let drawn = game.apply(&mut state, &Action::draw(PlayerId::new(0)));
//! assert_eq!(drawn.len(), 1);
//! assert_eq!(state.current_player, PlayerId::new(1));
//!
//! // Out of turn: nothing happens.
//! assert!(game.apply(&mut state, &Action::draw(PlayerId::new(0))).is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord,
    ConfigError, GameConfig,
    PlayerId, PlayerMap, PlayerStatus,
    DrawRng, GameRng, GameRngState,
    GamePhase, GameState, StateError,
};

pub use crate::cards::{Card, CardError, CardId, Rank, Suit};

pub use crate::zones::{Location, LocationType};

pub use crate::rules::{ActionOutcome, GameResult, RejectReason, RulesEngine};

pub use crate::games::{TwentyOne, TwentyOneBuilder};

pub use crate::view::{filter_for_viewer, initial_cards_for, TableSnapshot, Viewer};
