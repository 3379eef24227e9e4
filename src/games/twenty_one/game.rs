//! Twenty-one engine implementation.

use tracing::{debug, info, warn};

use crate::core::{
    Action, ActionKind, ActionRecord, ConfigError, DrawRng, GameConfig, GamePhase, GameRng,
    GameState, PlayerId, PlayerStatus,
};
use crate::rules::{
    compute_player_points, determine_winner, next_card_to_draw, ActionOutcome, GameResult,
    RejectReason, RulesEngine,
};

/// Rules engine for one or more matches sharing a config and a draw RNG.
///
/// The engine holds no match state: every call takes the caller's
/// `GameState`, so independent matches can run side by side. Calls for the
/// same match must not overlap.
#[derive(Clone, Debug)]
pub struct TwentyOne<R = GameRng> {
    config: GameConfig,
    rng: R,
}

/// Builder for an engine and its first match.
#[derive(Clone, Debug, Default)]
pub struct TwentyOneBuilder {
    config: GameConfig,
}

impl TwentyOneBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn decks(mut self, number_of_decks: u32) -> Self {
        self.config.number_of_decks = number_of_decks;
        self
    }

    #[must_use]
    pub fn rank_limit(mut self, rank_limit: u8) -> Self {
        self.config.rank_limit = rank_limit;
        self
    }

    #[must_use]
    pub fn winning_point(mut self, winning_point: u32) -> Self {
        self.config.winning_point = winning_point;
        self
    }

    /// Build a seeded engine and a fresh match for `player_names`.
    pub fn build(self, player_names: &[&str], seed: u64) -> Result<(TwentyOne, GameState), ConfigError> {
        let engine = TwentyOne::with_rng(self.config, GameRng::new(seed));
        let state = engine.create_game(player_names)?;
        Ok((engine, state))
    }
}

impl TwentyOne<GameRng> {
    /// Engine drawing from an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Engine with a reproducible draw sequence.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: DrawRng> TwentyOne<R> {
    /// Engine drawing from any `DrawRng`.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn check_turn(state: &GameState, player: PlayerId) -> Result<(), RejectReason> {
        if state.is_over() {
            return Err(RejectReason::GameOver);
        }
        if player != state.current_player {
            return Err(RejectReason::NotPlayersTurn {
                expected: state.current_player.0,
                actual: player.0,
            });
        }
        Ok(())
    }

    /// Next seat after the current one that has not given up, wrapping
    /// around. `None` once every seat has given up.
    fn next_active_player(state: &GameState) -> Option<PlayerId> {
        let count = state.player_count();
        let current = state.current_player.index();
        (1..=count)
            .map(|step| PlayerId::new(((current + step) % count) as u8))
            .find(|&p| state.status(p) != Some(PlayerStatus::GiveUp))
    }

    /// Post-action bookkeeping shared by every accepted action.
    ///
    /// A match with no seat left drawing and no winner is ended on purpose,
    /// not only when every seat has given up: no later action can change it.
    fn finish_action(state: &mut GameState, action: &Action) {
        let sequence = state.play_count;

        if let Some(winner) = determine_winner(state, state.winning_point) {
            state.winner = Some(winner);
            state.phase = GamePhase::GameOver;
            info!(winner = winner.0, points = state.points[winner], "game over");
        } else if !state.player_states.values().any(|&s| s == PlayerStatus::Draw) {
            // Nobody can change the totals any more, so nobody can win.
            state.phase = GamePhase::GameOver;
            warn!(play_count = sequence + 1, "no player left drawing; game over without a winner");
        }

        state.play_count += 1;
        state.action_history.push_back(ActionRecord::new(sequence, *action));

        if state.is_over() {
            return;
        }

        if let Some(next) = Self::next_active_player(state) {
            state.current_player = next;
            debug!(next = next.0, play_count = state.play_count, "turn passed");
        }
    }
}

impl<R: DrawRng> RulesEngine for TwentyOne<R> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn create_game(&self, player_names: &[&str]) -> Result<GameState, ConfigError> {
        let state = GameState::new(player_names.iter().copied(), &self.config)?;
        info!(
            players = state.player_count(),
            deck_size = state.deck_size(),
            winning_point = state.winning_point,
            "game created"
        );
        Ok(state)
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<ActionKind> {
        if Self::check_turn(state, player).is_err() {
            return vec![];
        }

        let mut actions = Vec::with_capacity(2);
        if state.unused_count() > 0 {
            actions.push(ActionKind::DrawCard);
        }
        actions.push(ActionKind::GiveUp);
        actions
    }

    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> ActionOutcome {
        let player = action.player;
        if let Err(reason) = Self::check_turn(state, player) {
            debug!(player = player.0, action = %action.kind, %reason, "action rejected");
            return ActionOutcome::Rejected(reason);
        }

        let changed = match action.kind {
            ActionKind::DrawCard => {
                let drawn = next_card_to_draw(state, &mut self.rng)
                    .and_then(|id| state.move_to_hand(id, player));
                let Some(card) = drawn else {
                    debug!(player = player.0, "action rejected: deck exhausted");
                    return ActionOutcome::Rejected(RejectReason::DeckExhausted);
                };

                let points = compute_player_points(state, player);
                state.points[player] = points;
                state.player_states[player] =
                    state.player_states[player].after_draw(points, state.winning_point);
                debug!(player = player.0, card = %card, points, "card drawn");
                vec![card]
            }
            ActionKind::GiveUp => {
                state.player_states[player] = state.player_states[player].after_give_up();
                debug!(player = player.0, "player gave up");
                vec![]
            }
        };

        Self::finish_action(state, action);

        if changed.is_empty() {
            ActionOutcome::AcceptedNoChanges
        } else {
            ActionOutcome::Accepted(changed)
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }
        Some(state.winner.map_or(GameResult::NoWinner, GameResult::Winner))
    }
}
