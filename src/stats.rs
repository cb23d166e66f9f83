//! Schedule quality metrics.
//!
//! Aggregates a generated schedule into the numbers a session organizer
//! cares about:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Match count | Matches actually placed |
//! | Shortfall | Requested minus placed |
//! | Games by player | Final matches-played per player |
//! | Game-count spread | max − min games across the roster |
//! | Mean match level | Average of per-match average levels |
//! | Off-type matches | Matches resolved to a non-requested composition |

use std::collections::HashMap;

use crate::models::{MatchType, Schedule};

/// Aggregated schedule metrics.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Matches actually placed.
    pub match_count: usize,
    /// Matches requested (courts × rounds).
    pub target_matches: usize,
    /// Final matches-played per player id.
    pub games_by_player: HashMap<String, u32>,
    /// Largest difference in games played between any two players.
    pub game_count_spread: u32,
    /// Mean of per-match average levels; 0.0 for an empty schedule.
    pub mean_match_level: f64,
    /// Matches whose composition differs from the requested type.
    pub off_type_matches: usize,
}

impl ScheduleSummary {
    /// Computes metrics from a schedule and the originally requested type.
    ///
    /// Player counts come from the schedule's returned roster, which is
    /// authoritative — they are not recomputed from the match list.
    pub fn calculate(schedule: &Schedule, requested: MatchType) -> Self {
        let match_count = schedule.match_count();

        let games_by_player: HashMap<String, u32> = schedule
            .players
            .iter()
            .map(|p| (p.id.clone(), p.matches_played))
            .collect();

        let game_count_spread = match (
            games_by_player.values().max(),
            games_by_player.values().min(),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        let mean_match_level = if match_count == 0 {
            0.0
        } else {
            schedule.all_matches().map(|m| m.average_level).sum::<f64>() / match_count as f64
        };

        let off_type_matches = schedule
            .all_matches()
            .filter(|m| m.match_type != requested)
            .count();

        Self {
            match_count,
            target_matches: schedule.target_matches,
            games_by_player,
            game_count_spread,
            mean_match_level,
            off_type_matches,
        }
    }

    /// Whether every requested match was placed.
    pub fn met_target(&self) -> bool {
        self.match_count >= self.target_matches
    }
}
