//! Public table snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{GamePhase, GameState, PlayerId, PlayerMap, PlayerStatus};

/// The per-match fields every client may see, independent of hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    /// Seat of the client the snapshot is addressed to, if any.
    pub player_index: Option<PlayerId>,
    pub current_turn_player_index: PlayerId,
    pub phase: GamePhase,
    pub play_count: u32,
    pub player_states: PlayerMap<PlayerStatus>,
    pub points: PlayerMap<u32>,
    pub hand_sizes: PlayerMap<usize>,
    pub winner: Option<PlayerId>,
}

impl TableSnapshot {
    /// Snapshot for a broadcast to everyone.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        Self {
            player_index: None,
            current_turn_player_index: state.current_player,
            phase: state.phase,
            play_count: state.play_count,
            player_states: state.player_states.clone(),
            points: state.points.clone(),
            hand_sizes: state.hand_sizes(),
            winner: state.winner,
        }
    }

    /// Snapshot addressed to one seat.
    #[must_use]
    pub fn for_player(state: &GameState, player: PlayerId) -> Self {
        Self { player_index: Some(player), ..Self::new(state) }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&GameState> for TableSnapshot {
    fn from(state: &GameState) -> Self {
        Self::new(state)
    }
}
