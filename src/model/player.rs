//! Player records.

use super::category::Category;

/// A candidate for the roster. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name. Unique within a category for selection purposes.
    pub name: String,
    /// Position.
    pub category: Category,
    /// Price, a positive integer.
    pub price: u64,
    /// Club. Carried through for reporting only.
    pub team: String,
    /// Accumulated points.
    pub score: u64,
}

impl Player {
    /// Creates a player with an empty team.
    pub fn new(name: impl Into<String>, category: Category, price: u64, score: u64) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            team: String::new(),
            score,
        }
    }

    /// Sets the team.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }
}
