//! Scheduling domain models.
//!
//! Core data types for doubles-session scheduling: the roster entry
//! ([`Player`]), the derived pairing ([`Team`]), accepted results
//! ([`Match`], [`Round`], [`Schedule`]), and the per-run partnered-with
//! relation ([`PartnerHistory`]).

mod history;
mod player;
mod round;
mod team;

pub use history::PartnerHistory;
pub use player::{Gender, MatchType, Player};
pub use round::{Match, Round, Schedule};
pub use team::Team;
