//! Core engine types: players, RNG, configuration, actions, state.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{ConfigError, GameConfig};
pub use player::{PlayerId, PlayerMap, PlayerStatus};
pub use rng::{DrawRng, GameRng, GameRngState};
pub use state::{GamePhase, GameState, StateError};
