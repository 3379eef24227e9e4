//! Randomness for card draws.
//!
//! The draw selector only needs "a uniform index below `n`", expressed by the
//! [`DrawRng`] trait. Production code uses [`GameRng`], a seedable ChaCha8
//! generator; tests can use a seeded `GameRng` for reproducible draw sequences
//! or plug in their own `DrawRng` to script exact picks.
//!
//! ```
//! use twenty_one::core::{DrawRng, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! let picks_a: Vec<_> = (0..5).map(|_| a.pick_index(52)).collect();
//! let picks_b: Vec<_> = (0..5).map(|_| b.pick_index(52)).collect();
//! assert_eq!(picks_a, picks_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices for the draw selector.
pub trait DrawRng {
    /// Return an index uniformly distributed in `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl<R: DrawRng + ?Sized> DrawRng for &mut R {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}

/// Deterministic, seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so a match can be logged and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current position of the stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DrawRng for GameRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Serializable RNG checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
