//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};
use twenty_one::{GameState, TwentyOne, TwentyOneBuilder};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Two seats, one deck of A-5, first to 21.
pub fn small_game(seed: u64) -> (TwentyOne, GameState) {
    init_logging();
    TwentyOneBuilder::new()
        .decks(1)
        .rank_limit(5)
        .winning_point(21)
        .build(&["ann", "bo"], seed)
        .unwrap()
}

/// Hand sizes plus the unused pool must always add up to the deck.
pub fn assert_conserved(state: &GameState) {
    let held: usize = state.hand_sizes().values().sum();
    assert_eq!(held + state.unused_count(), state.deck_size());
}
