//! Owned snapshots of complete rosters.

use crate::model::{Category, Player};
use crate::ordering::RankBy;

/// A complete, feasible selection detached from any search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    /// Players in slot order.
    pub players: Vec<Player>,
    /// Summed score.
    pub score: u64,
    /// Summed price.
    pub price: u64,
}

impl Roster {
    /// Players grouped by category in [`Category::ALL`] order, slot order
    /// within a category.
    pub fn grouped(&self) -> Vec<&Player> {
        RankBy::Category.sorted(&self.players)
    }

    /// Names of the selected players of one category, in slot order.
    pub fn names(&self, category: Category) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Whether the roster contains a player with this name and category.
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.category == category && p.name == name)
    }
}
