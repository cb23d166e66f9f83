//! Partner history.
//!
//! Records which players have already been teamed together during the
//! current generation run. The relation is symmetric by construction and
//! grows monotonically; it is created empty per run and discarded with it.

use std::collections::{HashMap, HashSet};

/// Symmetric partnered-with relation over player ids.
#[derive(Debug, Clone, Default)]
pub struct PartnerHistory {
    partners: HashMap<String, HashSet<String>>,
}

impl PartnerHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers a player with no partners yet.
    pub fn register(&mut self, player_id: impl Into<String>) {
        self.partners.entry(player_id.into()).or_default();
    }

    /// Records that two players were teamed together. Keeps both
    /// directions so the relation stays symmetric.
    pub fn record(&mut self, a: &str, b: &str) {
        self.partners
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.partners
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Whether the two players have been teamed together this run.
    pub fn have_partnered(&self, a: &str, b: &str) -> bool {
        self.partners.get(a).is_some_and(|s| s.contains(b))
            || self.partners.get(b).is_some_and(|s| s.contains(a))
    }

    /// Partners recorded for a player.
    pub fn partners_of(&self, player_id: &str) -> Option<&HashSet<String>> {
        self.partners.get(player_id)
    }
}
