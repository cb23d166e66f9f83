//! Exhaustive pairing search for one court slot.
//!
//! Enumerates every 4-player subset of the pool (in pool index order) and,
//! per subset, the three distinct splits into two unordered teams of two.
//! Valid splits are scored and the minimum-scoring candidate retained;
//! ties go to the first candidate seen in enumeration order, which keeps
//! the search fully deterministic.
//!
//! # Complexity
//! O(C(n,4) × 3) scored candidates — the engine's dominant cost.

use crate::models::{MatchType, PartnerHistory, Player, Team};

use super::scoring::{score_candidate, MatchScore, ScoringLimits};

/// The three ways to split four players `[a, b, c, d]` into two unordered
/// teams of two: first pair is team 1, second pair is team 2.
const TEAM_SPLITS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// Lexicographic enumerator of 4-element index subsets of `0..n`.
#[derive(Debug, Clone)]
pub struct ChooseFour {
    n: usize,
    indices: [usize; 4],
    done: bool,
}

/// Enumerates all 4-element index subsets of `0..n` in lexicographic order.
///
/// Yields nothing when `n < 4`.
pub fn choose_four(n: usize) -> ChooseFour {
    ChooseFour {
        n,
        indices: [0, 1, 2, 3],
        done: n < 4,
    }
}

impl Iterator for ChooseFour {
    type Item = [usize; 4];

    fn next(&mut self) -> Option<[usize; 4]> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // Advance to the lexicographic successor: bump the rightmost
        // index that still has room, then repack those to its right.
        let mut i = 4;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - (4 - i) {
                self.indices[i] += 1;
                for j in i + 1..4 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(current);
            }
        }
        self.done = true;
        Some(current)
    }
}

/// A scored candidate pairing for one slot.
#[derive(Debug, Clone)]
pub struct PairingCandidate {
    pub team1: Team,
    pub team2: Team,
    pub score: MatchScore,
}

/// Whether a `(p1, p2)` team is admissible for the requested composition
/// and has not already been partnered this run.
fn team_is_valid(
    p1: &Player,
    p2: &Player,
    match_type: MatchType,
    history: &PartnerHistory,
) -> bool {
    let composition_ok = match match_type.required_gender() {
        None => p1.gender != p2.gender,
        Some(gender) => p1.gender == gender && p2.gender == gender,
    };
    composition_ok && !history.have_partnered(&p1.id, &p2.id)
}

/// Finds the best feasible pairing in `pool` for the given composition.
///
/// `roster` is the full player-state snapshot used for game-count spread
/// scoring; `pool` is the subset actually available for this slot, in
/// priority order. Returns `None` when the pool is too small or the best
/// score reaches the acceptance threshold for the mode in force.
pub fn find_best_pairing(
    pool: &[Player],
    match_type: MatchType,
    history: &PartnerHistory,
    roster: &[Player],
    limits: &ScoringLimits,
    max_level_diff: f64,
    strict_counts: bool,
) -> Option<PairingCandidate> {
    if pool.len() < 4 {
        return None;
    }

    let mut best: Option<PairingCandidate> = None;

    for quad in choose_four(pool.len()) {
        for split in &TEAM_SPLITS {
            let (a, b) = (&pool[quad[split[0]]], &pool[quad[split[1]]]);
            let (c, d) = (&pool[quad[split[2]]], &pool[quad[split[3]]]);

            if !team_is_valid(a, b, match_type, history)
                || !team_is_valid(c, d, match_type, history)
            {
                continue;
            }

            let team1 = Team::new(a.clone(), b.clone());
            let team2 = Team::new(c.clone(), d.clone());
            let score =
                score_candidate(&team1, &team2, roster, limits, max_level_diff, strict_counts);

            // Strict `<`: first-seen candidate wins ties.
            if best.as_ref().map_or(true, |b| score < b.score) {
                best = Some(PairingCandidate {
                    team1,
                    team2,
                    score,
                });
            }
        }
    }

    best.filter(|b| b.score < limits.acceptance_threshold(strict_counts))
}
