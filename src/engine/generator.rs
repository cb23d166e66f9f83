//! Top-level match generation.
//!
//! `MatchGenerator` validates the request, initializes per-run state
//! (zeroed counters, empty partner history), drives round filling in
//! order, and assembles the final schedule. Rounds that produce no
//! matches are omitted from the output but do not stop later rounds.
//!
//! The returned [`Schedule`] carries the roster with final
//! matches-played counts: ownership of the counters transfers to the
//! caller, who must not recompute them from the match list.

use std::sync::Arc;

use tracing::warn;

use crate::error::GenerateError;
use crate::models::{MatchType, Player, Round, Schedule};

use super::rounds::fill_round;
use super::scoring::ScoringLimits;
use super::SessionState;

/// Hook notified when a relaxation tier resolves a court slot.
///
/// Purely observational: implementations must not assume any ordering
/// guarantees beyond round-then-court. `tier` is the 1-based ladder step
/// (see [`LADDER`](super::LADDER)).
pub trait SlotObserver: Send + Sync {
    fn slot_resolved(&self, round: u32, court: u32, tier: usize, match_type: MatchType);
}

/// Input container for one generation call.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Roster, in priority-tie-break order.
    pub players: Vec<Player>,
    /// Requested match composition.
    pub match_type: MatchType,
    /// Simultaneous courts per round.
    pub courts: u32,
    /// Rounds to generate.
    pub rounds: u32,
}

impl ScheduleRequest {
    /// Creates a request for one mixed court over one round.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            match_type: MatchType::Mixed,
            courts: 1,
            rounds: 1,
        }
    }

    /// Sets the requested composition.
    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Sets the court count.
    pub fn with_courts(mut self, courts: u32) -> Self {
        self.courts = courts;
        self
    }

    /// Sets the round count.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Matches this request asks for in total.
    pub fn target_matches(&self) -> usize {
        self.courts as usize * self.rounds as usize
    }
}

/// Doubles-match generator.
///
/// # Example
///
/// ```
/// use court_schedule::engine::{MatchGenerator, ScheduleRequest};
/// use court_schedule::models::{Gender, MatchType, Player};
///
/// let players = vec![
///     Player::new("m1", 3, Gender::Male),
///     Player::new("f1", 3, Gender::Female),
///     Player::new("m2", 3, Gender::Male),
///     Player::new("f2", 3, Gender::Female),
/// ];
/// let request = ScheduleRequest::new(players).with_match_type(MatchType::Mixed);
///
/// let schedule = MatchGenerator::new().generate(&request).unwrap();
/// assert_eq!(schedule.match_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MatchGenerator {
    limits: ScoringLimits,
    observer: Option<Arc<dyn SlotObserver>>,
}

impl MatchGenerator {
    /// Creates a generator with default scoring limits.
    pub fn new() -> Self {
        Self {
            limits: ScoringLimits::default(),
            observer: None,
        }
    }

    /// Overrides the scoring tuning constants.
    pub fn with_limits(mut self, limits: ScoringLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Attaches a slot-resolution observer.
    pub fn with_observer(mut self, observer: Arc<dyn SlotObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Generates a schedule for the request.
    ///
    /// # Errors
    /// * [`GenerateError::InsufficientPlayers`] — fewer than 4 players,
    ///   raised before any scheduling work.
    /// * [`GenerateError::NoFeasibleSchedule`] — rounds were requested
    ///   but every court slot in every round proved unfillable.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Schedule, GenerateError> {
        let found = request.players.len();
        if found < 4 {
            return Err(GenerateError::InsufficientPlayers { found });
        }

        let mut state = SessionState::new(request.players.clone());
        let mut rounds: Vec<Round> = Vec::new();

        for round_number in 1..=request.rounds {
            let round = fill_round(
                &mut state,
                round_number,
                request.courts,
                request.match_type,
                &self.limits,
                self.observer.as_deref(),
            );
            if round.matches.is_empty() {
                warn!(round = round_number, "round produced no matches");
            } else {
                rounds.push(round);
            }
        }

        if rounds.is_empty() && request.rounds > 0 {
            return Err(GenerateError::NoFeasibleSchedule);
        }

        let schedule = Schedule {
            rounds,
            players: state.players,
            target_matches: request.target_matches(),
        };
        if schedule.shortfall() > 0 {
            warn!(
                target = schedule.target_matches,
                generated = schedule.match_count(),
                "fewer matches than requested"
            );
        }
        Ok(schedule)
    }
}
