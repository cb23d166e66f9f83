//! Doubles-match scheduling engine.
//!
//! Given a roster of players tagged with skill level and gender, and
//! target counts of simultaneous courts and rounds, assigns players to
//! balanced teams and matches across rounds: respecting a requested
//! composition (mixed, male-only, female-only), keeping team levels
//! close, never repeating a partner pairing, and keeping every player's
//! game count within one of every other's. When strict satisfaction is
//! impossible, constraints relax through an ordered ladder of fallbacks.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Player`, `Team`, `Match`, `Round`,
//!   `Schedule`, `PartnerHistory`
//! - **`engine`**: The generator and its layers — scoring, combination
//!   search, relaxation ladder, round filling
//! - **`validation`**: Roster integrity checks (duplicate ids, level range)
//! - **`stats`**: Post-hoc schedule quality metrics
//! - **`error`**: Terminal generation errors
//!
//! # Properties
//!
//! The engine is pure and deterministic: no I/O, no randomness, no shared
//! state across calls. Identical roster order and parameters always yield
//! the identical schedule.

pub mod engine;
pub mod error;
pub mod models;
pub mod stats;
pub mod validation;
