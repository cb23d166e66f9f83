//! Team model.
//!
//! A team is a pair of distinct players with a derived average skill level.
//! Building a team has no failure mode; validity (distinctness, gender
//! composition, partner history) is enforced by the search layer.

use serde::{Deserialize, Serialize};

use super::Player;

/// A doubles team: two players plus their derived average level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// First player (pool order).
    pub player1: Player,
    /// Second player (pool order).
    pub player2: Player,
    /// Mean of the two skill levels.
    pub average_level: f64,
}

impl Team {
    /// Pairs two players, deriving the average level.
    pub fn new(player1: Player, player2: Player) -> Self {
        let average_level = f64::from(player1.level + player2.level) / 2.0;
        Self {
            player1,
            player2,
            average_level,
        }
    }

    /// Whether the given player id belongs to this team.
    pub fn contains(&self, player_id: &str) -> bool {
        self.player1.id == player_id || self.player2.id == player_id
    }

    /// Absolute difference between two teams' average levels.
    pub fn level_difference(&self, other: &Team) -> f64 {
        (self.average_level - other.average_level).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn player(id: &str, level: u8) -> Player {
        Player::new(id, level, Gender::Male)
    }

    #[test]
    fn test_average_level() {
        let team = Team::new(player("a", 2), player("b", 5));
        assert!((team.average_level - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_equal_levels() {
        let team = Team::new(player("a", 3), player("b", 3));
        assert!((team.average_level - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_contains() {
        let team = Team::new(player("a", 1), player("b", 1));
        assert!(team.contains("a"));
        assert!(team.contains("b"));
        assert!(!team.contains("c"));
    }

    #[test]
    fn test_level_difference() {
        let t1 = Team::new(player("a", 1), player("b", 2)); // 1.5
        let t2 = Team::new(player("c", 4), player("d", 5)); // 4.5
        assert!((t1.level_difference(&t2) - 3.0).abs() < 1e-10);
        assert!((t2.level_difference(&t1) - 3.0).abs() < 1e-10);
    }
}
