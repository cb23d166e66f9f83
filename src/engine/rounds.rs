//! Round filling.
//!
//! Fills one round's courts from the players not yet used this round.
//! Before each slot the available pool is stably sorted ascending by
//! matches-played (roster order breaks ties), so players with fewer games
//! are offered to the search first. A slot the relaxation ladder cannot
//! fill truncates the round: matches already placed are kept, remaining
//! courts stay empty, and later rounds are unaffected.

use std::collections::HashSet;

use tracing::warn;

use crate::models::{Match, MatchType, Round};

use super::generator::SlotObserver;
use super::relaxation::resolve_slot;
use super::scoring::ScoringLimits;
use super::SessionState;

/// Fills one round, mutating `state` as matches are accepted.
///
/// The returned round may hold fewer than `courts` matches, or none at
/// all; the caller decides whether empty rounds appear in the output.
pub fn fill_round(
    state: &mut SessionState,
    round_number: u32,
    courts: u32,
    requested: MatchType,
    limits: &ScoringLimits,
    observer: Option<&dyn SlotObserver>,
) -> Round {
    let mut matches: Vec<Match> = Vec::new();
    let mut used_this_round: HashSet<String> = HashSet::new();

    while matches.len() < courts as usize {
        let mut pool: Vec<_> = state
            .players
            .iter()
            .filter(|p| !used_this_round.contains(&p.id))
            .cloned()
            .collect();
        // Stable sort: fewest games first, roster order on ties.
        pool.sort_by_key(|p| p.matches_played);

        if pool.len() < 4 {
            break;
        }

        let court = matches.len() as u32 + 1;
        let Some(resolution) =
            resolve_slot(&pool, requested, &state.history, &state.players, limits)
        else {
            warn!(
                round = round_number,
                court, "no relaxation tier could fill the slot, truncating round"
            );
            break;
        };

        let team1 = resolution.candidate.team1;
        let team2 = resolution.candidate.team2;
        state.apply_match(
            (&team1.player1.id, &team1.player2.id),
            (&team2.player1.id, &team2.player2.id),
        );
        for id in [
            &team1.player1.id,
            &team1.player2.id,
            &team2.player1.id,
            &team2.player2.id,
        ] {
            used_this_round.insert(id.clone());
        }

        if let Some(observer) = observer {
            observer.slot_resolved(round_number, court, resolution.tier, resolution.match_type);
        }

        matches.push(Match::new(
            team1,
            team2,
            resolution.match_type,
            round_number,
            court,
        ));
    }

    Round {
        round_number,
        matches,
    }
}
