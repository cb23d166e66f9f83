//! Engine error types.
//!
//! Both variants are terminal for a generation call: no partial schedule
//! is returned on total failure. A slot-level relaxation failure inside a
//! round is not an error — it only truncates that round.

use thiserror::Error;

/// Why a generation call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Fewer than four players supplied; raised before any scheduling work.
    #[error("at least 4 players are required, got {found}")]
    InsufficientPlayers {
        /// Number of players actually supplied.
        found: usize,
    },

    /// Rounds were requested but the relaxation ladder failed for every
    /// court slot in every round, leaving the schedule empty.
    #[error("no feasible schedule: every relaxation tier failed for every slot")]
    NoFeasibleSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = GenerateError::InsufficientPlayers { found: 3 };
        assert_eq!(e.to_string(), "at least 4 players are required, got 3");
        assert!(GenerateError::NoFeasibleSchedule
            .to_string()
            .contains("no feasible schedule"));
    }
}
