//! Win evaluation.
//!
//! Checked after every accepted action, in priority order:
//!
//! 1. A player whose total equals the winning point wins at once, even while
//!    others are still drawing. Lowest seat first.
//! 2. Otherwise, once anyone is bust or nobody is still drawing, the non-bust
//!    player with the highest total wins (lowest seat on ties). The comparison
//!    starts from a zero baseline, so a field of zero totals has no winner.
//! 3. Otherwise the match goes on.

use crate::core::{GameState, PlayerId, PlayerMap, PlayerStatus};

/// Winner of the match in its current state, or `None` if undecided.
#[must_use]
pub fn determine_winner(state: &GameState, winning_point: u32) -> Option<PlayerId> {
    evaluate(&state.points, &state.player_states, winning_point)
}

/// Win evaluation over raw per-player totals and statuses.
///
/// ```
/// use twenty_one::core::{PlayerId, PlayerMap, PlayerStatus};
/// use twenty_one::rules::evaluate;
///
/// let points = PlayerMap::from(vec![25, 18]);
/// let states = PlayerMap::from(vec![PlayerStatus::Bust, PlayerStatus::Draw]);
/// assert_eq!(evaluate(&points, &states, 21), Some(PlayerId::new(1)));
/// ```
#[must_use]
pub fn evaluate(
    points: &PlayerMap<u32>,
    statuses: &PlayerMap<PlayerStatus>,
    winning_point: u32,
) -> Option<PlayerId> {
    if let Some((player, _)) = points.iter().find(|(_, &p)| p == winning_point) {
        return Some(player);
    }

    let anyone_bust = statuses.values().any(|&s| s == PlayerStatus::Bust);
    let anyone_drawing = statuses.values().any(|&s| s == PlayerStatus::Draw);
    if !anyone_bust && anyone_drawing {
        return None;
    }

    let mut best: Option<(PlayerId, u32)> = None;
    for (player, &total) in points.iter() {
        if statuses.get(player) == Some(&PlayerStatus::Bust) {
            continue;
        }
        let to_beat = best.map_or(0, |(_, p)| p);
        if total > to_beat {
            best = Some((player, total));
        }
    }
    best.map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerStatus::{Bust, Draw, GiveUp};

    fn eval(points: Vec<u32>, statuses: Vec<PlayerStatus>) -> Option<u8> {
        evaluate(&PlayerMap::from(points), &PlayerMap::from(statuses), 21).map(|p| p.0)
    }

    #[test]
    fn test_exact_match_wins_regardless_of_status() {
        assert_eq!(eval(vec![21, 15], vec![Draw, Draw]), Some(0));
        assert_eq!(eval(vec![21, 15], vec![GiveUp, Bust]), Some(0));
        assert_eq!(eval(vec![3, 21, 21], vec![Draw, Draw, Draw]), Some(1));
    }

    #[test]
    fn test_exact_match_beats_comparison() {
        assert_eq!(eval(vec![20, 21, 25], vec![Draw, Draw, Bust]), Some(1));
    }

    #[test]
    fn test_bust_triggers_comparison() {
        assert_eq!(eval(vec![25, 18], vec![Bust, Draw]), Some(1));
        assert_eq!(eval(vec![12, 30, 19], vec![Draw, Bust, Draw]), Some(2));
    }

    #[test]
    fn test_nobody_drawing_triggers_comparison() {
        assert_eq!(eval(vec![10, 14], vec![GiveUp, GiveUp]), Some(1));
        assert_eq!(eval(vec![9, 4], vec![GiveUp, GiveUp]), Some(0));
    }

    #[test]
    fn test_ties_go_to_lowest_seat() {
        assert_eq!(eval(vec![18, 18, 30], vec![Draw, Draw, Bust]), Some(0));
    }

    #[test]
    fn test_undecided_while_everyone_draws() {
        assert_eq!(eval(vec![0, 0], vec![Draw, Draw]), None);
        assert_eq!(eval(vec![20, 19], vec![Draw, Draw]), None);
        assert_eq!(eval(vec![20, 19], vec![GiveUp, Draw]), None);
    }

    #[test]
    fn test_zero_baseline_yields_no_winner() {
        assert_eq!(eval(vec![0, 0], vec![Bust, Bust]), None);
        assert_eq!(eval(vec![0, 0], vec![GiveUp, GiveUp]), None);
        assert_eq!(eval(vec![24, 0], vec![Bust, Draw]), None);
    }

    #[test]
    fn test_all_bust_has_no_winner() {
        assert_eq!(eval(vec![22, 25], vec![Bust, Bust]), None);
    }
}
