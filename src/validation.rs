//! Roster validation.
//!
//! Structural integrity checks on a roster before scheduling. Detects:
//! - Duplicate player ids
//! - Blank player ids
//! - Skill levels outside the 1–5 range
//!
//! These are caller-input defects, reported all at once; the engine's own
//! minimum-roster check lives in the generator and uses
//! [`GenerateError`](crate::error::GenerateError).

use std::collections::HashSet;

use crate::models::Player;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two players share the same id.
    DuplicateId,
    /// A player id is empty or whitespace.
    BlankId,
    /// A skill level is outside 1–5.
    LevelOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. No duplicate player ids
/// 2. No blank player ids
/// 3. All skill levels within 1–5
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(players: &[Player]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for player in players {
        if player.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Player '{}' has a blank id", player.name),
            ));
        } else if !seen_ids.insert(player.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate player id: {}", player.id),
            ));
        }

        if !(1..=5).contains(&player.level) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelOutOfRange,
                format!(
                    "Player '{}' has level {} outside 1-5",
                    player.id, player.level
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn sample_roster() -> Vec<Player> {
        vec![
            Player::new("p1", 3, Gender::Male).with_name("A"),
            Player::new("p2", 1, Gender::Female).with_name("B"),
            Player::new("p3", 5, Gender::Male).with_name("C"),
        ]
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut roster = sample_roster();
        roster.push(Player::new("p1", 2, Gender::Female));

        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("p1")));
    }

    #[test]
    fn test_blank_id() {
        let roster = vec![Player::new("  ", 3, Gender::Male).with_name("Anon")];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::BlankId));
    }

    #[test]
    fn test_level_out_of_range() {
        let roster = vec![
            Player::new("p1", 0, Gender::Male),
            Player::new("p2", 6, Gender::Female),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::LevelOutOfRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let roster = vec![
            Player::new("p1", 0, Gender::Male),
            Player::new("p1", 3, Gender::Female),
            Player::new("", 3, Gender::Male),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
