//! Player model and match composition types.
//!
//! Players are the schedulable resources of a doubles session: each carries
//! a skill level (1–5), a gender used by composition rules, and a running
//! matches-played counter owned by the engine for the duration of one
//! generation run.

use serde::{Deserialize, Serialize};

/// Player gender, used by match composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Requested or resolved match composition.
///
/// `Mixed` requires each team to pair one player of each gender;
/// `Male`/`Female` require all four participants to share that gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Mixed,
    Male,
    Female,
}

impl MatchType {
    /// Fallback compositions tried when this type cannot be satisfied,
    /// in ladder order: mixed falls back to the two single-gender types,
    /// a single-gender type falls back to mixed.
    pub fn alternates(self) -> &'static [MatchType] {
        match self {
            MatchType::Mixed => &[MatchType::Male, MatchType::Female],
            MatchType::Male | MatchType::Female => &[MatchType::Mixed],
        }
    }

    /// The single gender this type requires, if any.
    pub fn required_gender(self) -> Option<Gender> {
        match self {
            MatchType::Mixed => None,
            MatchType::Male => Some(Gender::Male),
            MatchType::Female => Some(Gender::Female),
        }
    }
}

/// A session participant.
///
/// The `matches_played` counter belongs to the engine: it is reset to zero
/// at the start of a generation run and incremented once per accepted match
/// referencing the player. The roster returned in a
/// [`Schedule`](crate::models::Schedule) carries the final counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill level, 1 (lowest) to 5 (highest).
    pub level: u8,
    /// Gender, used by composition rules.
    pub gender: Gender,
    /// Optional group tag (caller metadata, ignored by the engine).
    pub group: Option<String>,
    /// Matches played so far in the current run.
    pub matches_played: u32,
}

impl Player {
    /// Creates a player with the given id, level, and gender.
    pub fn new(id: impl Into<String>, level: u8, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            level,
            gender,
            group: None,
            matches_played: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group tag.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder() {
        let p = Player::new("p1", 3, Gender::Female)
            .with_name("Ana")
            .with_group("club-a");

        assert_eq!(p.id, "p1");
        assert_eq!(p.name, "Ana");
        assert_eq!(p.level, 3);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.group.as_deref(), Some("club-a"));
        assert_eq!(p.matches_played, 0);
    }

    #[test]
    fn test_alternates_ladder_order() {
        assert_eq!(
            MatchType::Mixed.alternates(),
            &[MatchType::Male, MatchType::Female]
        );
        assert_eq!(MatchType::Male.alternates(), &[MatchType::Mixed]);
        assert_eq!(MatchType::Female.alternates(), &[MatchType::Mixed]);
    }

    #[test]
    fn test_required_gender() {
        assert_eq!(MatchType::Mixed.required_gender(), None);
        assert_eq!(MatchType::Male.required_gender(), Some(Gender::Male));
        assert_eq!(MatchType::Female.required_gender(), Some(Gender::Female));
    }

    #[test]
    fn test_player_serde_round_trip() {
        let p = Player::new("p1", 5, Gender::Male).with_name("Bo");
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
