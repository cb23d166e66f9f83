//! Constraint relaxation ladder.
//!
//! When a court slot cannot be filled under the strictest constraints, the
//! controller walks a fixed ladder of increasingly permissive attempts and
//! stops at the first that yields a pairing:
//!
//! 1. Requested type, level cap 1.0, strict game counts
//! 2. Alternate type(s), level cap 1.0, strict game counts
//! 3. Requested type, level cap 1.5, strict game counts
//! 4. Alternate type(s), level cap 1.5, strict game counts
//! 5. Requested type, level cap 1.5, relaxed game counts
//! 6. Alternate type(s), level cap 1.5, relaxed game counts
//!
//! Every attempt is preceded by a gender-count feasibility check so the
//! combinatorial search never runs against a pool that cannot possibly
//! satisfy the composition.

use tracing::{debug, trace};

use crate::models::{Gender, MatchType, PartnerHistory, Player};

use super::scoring::ScoringLimits;
use super::search::{find_best_pairing, PairingCandidate};

/// Which composition(s) a ladder step tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelection {
    /// The composition the caller asked for.
    Requested,
    /// The fallback composition(s), in [`MatchType::alternates`] order.
    Alternates,
}

/// One step of the relaxation ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationTier {
    /// Composition(s) to try at this step.
    pub types: TypeSelection,
    /// Cap on the team average-level difference.
    pub max_level_diff: f64,
    /// Whether game-count spread above 1 is infeasible here.
    pub strict_counts: bool,
}

/// The fixed ladder, strictest first.
pub const LADDER: [RelaxationTier; 6] = [
    RelaxationTier {
        types: TypeSelection::Requested,
        max_level_diff: 1.0,
        strict_counts: true,
    },
    RelaxationTier {
        types: TypeSelection::Alternates,
        max_level_diff: 1.0,
        strict_counts: true,
    },
    RelaxationTier {
        types: TypeSelection::Requested,
        max_level_diff: 1.5,
        strict_counts: true,
    },
    RelaxationTier {
        types: TypeSelection::Alternates,
        max_level_diff: 1.5,
        strict_counts: true,
    },
    RelaxationTier {
        types: TypeSelection::Requested,
        max_level_diff: 1.5,
        strict_counts: false,
    },
    RelaxationTier {
        types: TypeSelection::Alternates,
        max_level_diff: 1.5,
        strict_counts: false,
    },
];

/// A successfully resolved slot: the pairing, the composition actually
/// used, and the 1-based ladder step that produced it.
#[derive(Debug, Clone)]
pub struct SlotResolution {
    pub candidate: PairingCandidate,
    pub match_type: MatchType,
    pub tier: usize,
}

/// Whether the pool can possibly satisfy a composition by gender counts:
/// mixed needs at least two of each gender, single-gender at least four
/// of the required one.
pub fn pool_supports(pool: &[Player], match_type: MatchType) -> bool {
    match match_type.required_gender() {
        None => {
            let males = pool.iter().filter(|p| p.gender == Gender::Male).count();
            let females = pool.len() - males;
            males >= 2 && females >= 2
        }
        Some(gender) => pool.iter().filter(|p| p.gender == gender).count() >= 4,
    }
}

/// Resolves one court slot by walking the ladder.
///
/// `pool` is the slot's available players in priority order; `roster` the
/// full player-state snapshot for spread scoring. Returns `None` when
/// every ladder step fails — the slot is unfillable and no composition
/// was viable.
pub fn resolve_slot(
    pool: &[Player],
    requested: MatchType,
    history: &PartnerHistory,
    roster: &[Player],
    limits: &ScoringLimits,
) -> Option<SlotResolution> {
    for (index, step) in LADDER.iter().enumerate() {
        let tier = index + 1;
        let types: &[MatchType] = match step.types {
            TypeSelection::Requested => std::slice::from_ref(&requested),
            TypeSelection::Alternates => requested.alternates(),
        };

        for &match_type in types {
            if !pool_supports(pool, match_type) {
                trace!(tier, ?match_type, "gender counts cannot satisfy composition");
                continue;
            }
            trace!(
                tier,
                ?match_type,
                max_level_diff = step.max_level_diff,
                strict_counts = step.strict_counts,
                "trying ladder step"
            );
            if let Some(candidate) = find_best_pairing(
                pool,
                match_type,
                history,
                roster,
                limits,
                step.max_level_diff,
                step.strict_counts,
            ) {
                debug!(tier, ?match_type, score = candidate.score, "slot resolved");
                return Some(SlotResolution {
                    candidate,
                    match_type,
                    tier,
                });
            }
        }
    }

    None
}
