//! Match, round, and schedule (solution) models.
//!
//! A schedule is the engine's output: the non-empty rounds in request
//! order, each holding its matches ordered by court number, plus the
//! roster with final matches-played counts. The roster inside the
//! schedule is the single source of truth for per-player counts —
//! callers never recompute them from the match list.

use serde::{Deserialize, Serialize};

use super::{MatchType, Player, Team};

/// An accepted match: two disjoint teams on one court of one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Match identifier, `match-{round}-{court}`.
    pub id: String,
    /// First team.
    pub team1: Team,
    /// Second team.
    pub team2: Team,
    /// Composition actually used — may differ from the requested type
    /// when the relaxation ladder fell back to an alternate.
    pub match_type: MatchType,
    /// Mean of the two team averages.
    pub average_level: f64,
    /// 1-based round number.
    pub round: u32,
    /// 1-based court number within the round.
    pub court: u32,
}

impl Match {
    /// Creates a match, deriving the id and overall average level.
    pub fn new(team1: Team, team2: Team, match_type: MatchType, round: u32, court: u32) -> Self {
        let average_level = (team1.average_level + team2.average_level) / 2.0;
        Self {
            id: format!("match-{round}-{court}"),
            team1,
            team2,
            match_type,
            average_level,
            round,
            court,
        }
    }

    /// Ids of the four participants, team 1 first.
    pub fn player_ids(&self) -> [&str; 4] {
        [
            &self.team1.player1.id,
            &self.team1.player2.id,
            &self.team2.player1.id,
            &self.team2.player2.id,
        ]
    }

    /// Whether the given player participates in this match.
    pub fn involves(&self, player_id: &str) -> bool {
        self.team1.contains(player_id) || self.team2.contains(player_id)
    }
}

/// One round: matches ordered by court number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub round_number: u32,
    /// Matches, court 1 first.
    pub matches: Vec<Match>,
}

/// A complete generated schedule.
///
/// Contains only non-empty rounds. `players` is the input roster with
/// final matches-played counts (ownership of the counters transfers to
/// the caller here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Non-empty rounds in request order.
    pub rounds: Vec<Round>,
    /// Roster with final matches-played counts.
    pub players: Vec<Player>,
    /// Matches requested: courts × rounds.
    pub target_matches: usize,
}

impl Schedule {
    /// Total number of matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// How many requested matches could not be placed.
    pub fn shortfall(&self) -> usize {
        self.target_matches.saturating_sub(self.match_count())
    }

    /// All matches in round, then court order.
    pub fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    /// Matches referencing the given player.
    pub fn matches_for_player(&self, player_id: &str) -> Vec<&Match> {
        self.all_matches().filter(|m| m.involves(player_id)).collect()
    }

    /// The round with the given number, if it produced any matches.
    pub fn round(&self, round_number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.round_number == round_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn player(id: &str, level: u8, gender: Gender) -> Player {
        Player::new(id, level, gender)
    }

    fn sample_match(round: u32, court: u32) -> Match {
        let t1 = Team::new(
            player("m1", 3, Gender::Male),
            player("f1", 3, Gender::Female),
        );
        let t2 = Team::new(
            player("m2", 2, Gender::Male),
            player("f2", 4, Gender::Female),
        );
        Match::new(t1, t2, MatchType::Mixed, round, court)
    }

    #[test]
    fn test_match_id_format() {
        let m = sample_match(2, 3);
        assert_eq!(m.id, "match-2-3");
        assert_eq!(m.round, 2);
        assert_eq!(m.court, 3);
    }

    #[test]
    fn test_match_average_level() {
        let m = sample_match(1, 1);
        // Teams average 3.0 and 3.0
        assert!((m.average_level - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_player_ids_and_involves() {
        let m = sample_match(1, 1);
        assert_eq!(m.player_ids(), ["m1", "f1", "m2", "f2"]);
        assert!(m.involves("f2"));
        assert!(!m.involves("f3"));
    }

    #[test]
    fn test_schedule_queries() {
        let schedule = Schedule {
            rounds: vec![
                Round {
                    round_number: 1,
                    matches: vec![sample_match(1, 1), sample_match(1, 2)],
                },
                Round {
                    round_number: 3,
                    matches: vec![sample_match(3, 1)],
                },
            ],
            players: Vec::new(),
            target_matches: 6,
        };

        assert_eq!(schedule.match_count(), 3);
        assert_eq!(schedule.shortfall(), 3);
        assert_eq!(schedule.matches_for_player("m1").len(), 3);
        assert!(schedule.round(3).is_some());
        assert!(schedule.round(2).is_none());
    }

    #[test]
    fn test_shortfall_saturates() {
        let schedule = Schedule {
            rounds: vec![Round {
                round_number: 1,
                matches: vec![sample_match(1, 1)],
            }],
            players: Vec::new(),
            target_matches: 0,
        };
        assert_eq!(schedule.shortfall(), 0);
    }
}
