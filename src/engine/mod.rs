//! The match-generation engine.
//!
//! Components, leaf-first:
//!
//! - **`scoring`**: candidate scoring with sentinel penalty bands
//! - **`search`**: exhaustive choose-4 × split enumeration per slot
//! - **`relaxation`**: the ordered fallback ladder of constraint sets
//! - **`rounds`**: fills one round's courts, fewest-games players first
//! - **`generator`**: validation, state threading, and schedule assembly
//!
//! Data flows strictly downward (generator → rounds → relaxation →
//! search → scoring); counters and partner history flow back up inside
//! an explicit [`SessionState`] value threaded between steps.

mod generator;
mod relaxation;
mod rounds;
mod scoring;
mod search;

pub use generator::{MatchGenerator, ScheduleRequest, SlotObserver};
pub use relaxation::{pool_supports, resolve_slot, RelaxationTier, SlotResolution, TypeSelection, LADDER};
pub use rounds::fill_round;
pub use scoring::{score_candidate, MatchScore, ScoringLimits};
pub use search::{choose_four, find_best_pairing, ChooseFour, PairingCandidate};

use crate::models::{PartnerHistory, Player};

/// Mutable per-run scheduling state: the roster with live game counters
/// and the partnered-with history.
///
/// Created at the start of one generation call, threaded between round
/// steps, and consumed into the final schedule. Nothing here outlives
/// the call.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Roster snapshot with running matches-played counters.
    pub players: Vec<Player>,
    /// Pairings accepted so far this run.
    pub history: PartnerHistory,
}

impl SessionState {
    /// Initializes run state: counters zeroed, one empty history entry
    /// per player.
    pub fn new(mut players: Vec<Player>) -> Self {
        let mut history = PartnerHistory::new();
        for player in &mut players {
            player.matches_played = 0;
            history.register(player.id.clone());
        }
        Self { players, history }
    }

    /// Records an accepted pairing of four players: bumps the four
    /// counters and stores both partnerships symmetrically.
    pub fn apply_match(&mut self, team1_ids: (&str, &str), team2_ids: (&str, &str)) {
        let ids = [team1_ids.0, team1_ids.1, team2_ids.0, team2_ids.1];
        for player in &mut self.players {
            if ids.contains(&player.id.as_str()) {
                player.matches_played += 1;
            }
        }
        self.history.record(team1_ids.0, team1_ids.1);
        self.history.record(team2_ids.0, team2_ids.1);
    }
}
