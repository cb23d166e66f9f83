//! Candidate-pairing score evaluation.
//!
//! Scores a candidate match (two teams) against the active constraints.
//! **Lower score = better candidate.** Scores fall into bands:
//!
//! | Band | Meaning |
//! |------|---------|
//! | `level_diff` | Clean: balanced and fair |
//! | `level_diff + spread * 0.8` | Relaxed mode: fair-count overage tolerated, penalized |
//! | `50 + spread` | Strict mode: fair-count overage, infeasible |
//! | `1000 + level_diff` | Level cap exceeded, infeasible in any mode |
//!
//! The band boundaries double as acceptance thresholds: a search result is
//! only usable when its best score sits below the threshold for the mode
//! in force.

use crate::models::{Player, Team};

/// Score of a candidate pairing. Lower is better.
pub type MatchScore = f64;

/// Tuning constants for the score bands.
///
/// The defaults reproduce the engine's historical behavior; they are
/// exposed as data rather than hard-coded so callers can retune without
/// touching the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringLimits {
    /// Base penalty when the team level difference exceeds the cap.
    pub hard_penalty_base: f64,
    /// Base penalty when the game-count spread exceeds 1 in strict mode.
    pub strict_penalty_base: f64,
    /// Weight applied to the game-count spread in relaxed mode.
    pub spread_weight: f64,
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self {
            hard_penalty_base: 1000.0,
            strict_penalty_base: 50.0,
            spread_weight: 0.8,
        }
    }
}

impl ScoringLimits {
    /// Highest score still accepted in the given mode.
    ///
    /// Strict mode rejects at the strict band; relaxed mode rejects only
    /// at the hard band.
    pub fn acceptance_threshold(&self, strict_counts: bool) -> f64 {
        if strict_counts {
            self.strict_penalty_base
        } else {
            self.hard_penalty_base
        }
    }
}

/// Scores a candidate pairing of `team1` vs `team2`.
///
/// `roster` is the full current player-state snapshot (all players, not
/// just the pool): the game-count spread is computed over everyone, after
/// simulating a +1 for the four participants.
///
/// # Arguments
/// * `max_level_diff` - Cap on the team average-level difference.
/// * `strict_counts` - Whether a game-count spread above 1 is infeasible
///   (strict) or merely penalized (relaxed).
pub fn score_candidate(
    team1: &Team,
    team2: &Team,
    roster: &[Player],
    limits: &ScoringLimits,
    max_level_diff: f64,
    strict_counts: bool,
) -> MatchScore {
    let level_diff = team1.level_difference(team2);
    if level_diff > max_level_diff {
        return limits.hard_penalty_base + level_diff;
    }

    // Simulate accepting this match and measure the roster-wide spread.
    let mut max_games = u32::MIN;
    let mut min_games = u32::MAX;
    for player in roster {
        let games = if team1.contains(&player.id) || team2.contains(&player.id) {
            player.matches_played + 1
        } else {
            player.matches_played
        };
        max_games = max_games.max(games);
        min_games = min_games.min(games);
    }
    let spread = max_games.saturating_sub(min_games);

    if spread > 1 {
        if strict_counts {
            return limits.strict_penalty_base + f64::from(spread);
        }
        return level_diff + f64::from(spread) * limits.spread_weight;
    }

    level_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Player};

    fn player(id: &str, level: u8, played: u32) -> Player {
        let mut p = Player::new(id, level, Gender::Male);
        p.matches_played = played;
        p
    }

    fn teams(levels: [u8; 4], played: u32) -> (Team, Team, Vec<Player>) {
        let roster: Vec<Player> = (0..4)
            .map(|i| player(&format!("p{i}"), levels[i], played))
            .collect();
        let t1 = Team::new(roster[0].clone(), roster[1].clone());
        let t2 = Team::new(roster[2].clone(), roster[3].clone());
        (t1, t2, roster)
    }

    #[test]
    fn test_clean_score_is_level_diff() {
        let (t1, t2, roster) = teams([3, 3, 2, 4], 0);
        let limits = ScoringLimits::default();
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.0, true);
        // Both teams average 3.0 → diff 0.0
        assert!((score - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_level_cap_exceeded_hard_penalty() {
        let (t1, t2, roster) = teams([1, 1, 5, 5], 0);
        let limits = ScoringLimits::default();
        // Diff 4.0 > cap 1.5
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.5, true);
        assert!((score - 1004.0).abs() < 1e-10);
        assert!(score >= limits.acceptance_threshold(false));
    }

    #[test]
    fn test_spread_strict_penalty() {
        let (t1, t2, mut roster) = teams([3, 3, 3, 3], 1);
        // A fifth player who has not played: accepting puts spread at 2
        roster.push(player("idle", 3, 0));
        let limits = ScoringLimits::default();
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.0, true);
        assert!((score - 52.0).abs() < 1e-10);
        assert!(score >= limits.acceptance_threshold(true));
    }

    #[test]
    fn test_spread_relaxed_penalty() {
        let (t1, t2, mut roster) = teams([3, 3, 3, 3], 1);
        roster.push(player("idle", 3, 0));
        let limits = ScoringLimits::default();
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.0, false);
        // level diff 0.0 + spread 2 * 0.8
        assert!((score - 1.6).abs() < 1e-10);
        assert!(score < limits.acceptance_threshold(false));
    }

    #[test]
    fn test_spread_of_one_is_clean() {
        let (t1, t2, mut roster) = teams([3, 3, 3, 3], 0);
        roster.push(player("idle", 3, 0));
        let limits = ScoringLimits::default();
        // Participants go to 1, idle stays at 0 → spread 1: no penalty
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.0, true);
        assert!((score - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_level_cap_checked_before_spread() {
        let (t1, t2, mut roster) = teams([1, 1, 5, 5], 5);
        roster.push(player("idle", 3, 0));
        let limits = ScoringLimits::default();
        // Both violations present: hard band wins
        let score = score_candidate(&t1, &t2, &roster, &limits, 1.0, false);
        assert!(score >= 1000.0);
    }

    #[test]
    fn test_custom_limits() {
        let (t1, t2, mut roster) = teams([3, 3, 3, 3], 1);
        roster.push(player("idle", 3, 0));
        let limits = ScoringLimits {
            hard_penalty_base: 9000.0,
            strict_penalty_base: 75.0,
            spread_weight: 0.5,
        };
        let strict = score_candidate(&t1, &t2, &roster, &limits, 1.0, true);
        assert!((strict - 77.0).abs() < 1e-10);
        let relaxed = score_candidate(&t1, &t2, &roster, &limits, 1.0, false);
        assert!((relaxed - 1.0).abs() < 1e-10);
    }
}
