//! Player identification, per-player storage and per-player status.
//!
//! ## PlayerId
//!
//! Seat index at the table (0-based, at most 255 seats). Fixed for the
//! lifetime of a match.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec`, indexed by `PlayerId`. Serializes as a
//! plain array so `[21, 15]` on the wire means seat 0 has 21 and seat 1 has 15.
//!
//! ## PlayerStatus
//!
//! `draw` is the only non-terminal status. `bust` and `giveup` are sticky.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Largest number of seats a table can have.
    pub const MAX_PLAYERS: usize = u8::MAX as usize;

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats of a table with `player_count` players.
    ///
    /// ```
    /// use twenty_one::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(Self::MAX_PLAYERS) as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Status of a single player within a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    /// Still drawing.
    #[default]
    Draw,
    /// Went over the winning point.
    Bust,
    /// Left the turn rotation voluntarily.
    #[serde(rename = "giveup")]
    GiveUp,
}

impl PlayerStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, PlayerStatus::Draw)
    }

    /// Status after a card was drawn and points were recomputed.
    ///
    /// Terminal statuses never revert to `Draw`.
    #[must_use]
    pub fn after_draw(self, points: u32, winning_point: u32) -> PlayerStatus {
        match self {
            PlayerStatus::Draw if points > winning_point => PlayerStatus::Bust,
            other => other,
        }
    }

    /// Status after the player gave up. A bust player stays bust.
    #[must_use]
    pub fn after_give_up(self) -> PlayerStatus {
        match self {
            PlayerStatus::Bust => PlayerStatus::Bust,
            _ => PlayerStatus::GiveUp,
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use twenty_one::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// points[PlayerId::new(1)] = 17;
/// assert_eq!(points.as_slice(), &[0, 17]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map by calling `factory` once per seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over `(PlayerId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> From<Vec<T>> for PlayerMap<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
