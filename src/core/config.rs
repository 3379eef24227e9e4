//! Match configuration.
//!
//! A `GameConfig` fixes the deck composition and the winning point for every
//! match created from it. It is usually pushed by an operator as JSON:
//!
//! ```
//! use twenty_one::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{"numberOfDecks": 2, "rankLimit": 10}"#).unwrap();
//! assert_eq!(config.number_of_decks, 2);
//! assert_eq!(config.rank_limit, 10);
//! assert_eq!(config.winning_point, 21);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::RANK_COUNT;

const DEFAULT_NUMBER_OF_DECKS: u32 = 5;
const DEFAULT_WINNING_POINT: u32 = 21;

/// Invalid configuration or table setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("too many players: {count} (at most {max})")]
    TooManyPlayers { count: usize, max: usize },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deck composition and scoring threshold for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// How many copies of the card catalog make up the deck.
    #[serde(default = "default_number_of_decks")]
    pub number_of_decks: u32,

    /// Only the first `rank_limit` ranks (A, 2, 3, ...) are used.
    /// Values above 13 mean "all ranks".
    #[serde(default = "default_rank_limit")]
    pub rank_limit: u8,

    /// Exact total that wins outright; anything above it is a bust.
    #[serde(default = "default_winning_point")]
    pub winning_point: u32,
}

fn default_number_of_decks() -> u32 {
    DEFAULT_NUMBER_OF_DECKS
}

fn default_rank_limit() -> u8 {
    RANK_COUNT as u8
}

fn default_winning_point() -> u32 {
    DEFAULT_WINNING_POINT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            number_of_decks: default_number_of_decks(),
            rank_limit: default_rank_limit(),
            winning_point: default_winning_point(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_decks(mut self, number_of_decks: u32) -> Self {
        self.number_of_decks = number_of_decks;
        self
    }

    #[must_use]
    pub fn with_rank_limit(mut self, rank_limit: u8) -> Self {
        self.rank_limit = rank_limit;
        self
    }

    #[must_use]
    pub fn with_winning_point(mut self, winning_point: u32) -> Self {
        self.winning_point = winning_point;
        self
    }

    /// Parse a JSON config document.
    ///
    /// Every numeric combination is playable: zero decks or a zero rank
    /// limit give an empty pool, and a zero winning point is met by any
    /// seat still holding no cards.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of ranks actually dealt, clamped to the catalog size.
    #[must_use]
    pub fn effective_rank_limit(&self) -> usize {
        usize::from(self.rank_limit).min(RANK_COUNT)
    }

    /// Total number of cards a match built from this config holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.number_of_decks as usize * 4 * self.effective_rank_limit()
    }

    /// Check a seat list against the table limits.
    pub fn validate_players(player_count: usize) -> Result<(), ConfigError> {
        if player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if player_count > PlayerId::MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: player_count,
                max: PlayerId::MAX_PLAYERS,
            });
        }
        Ok(())
    }
}
