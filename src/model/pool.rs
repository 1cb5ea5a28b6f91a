//! The candidate pool.

use super::category::Category;
use super::player::Player;
use crate::ordering::RankBy;

/// Candidate players partitioned by category.
///
/// Each category's list is sorted by [`RankBy::Efficiency`] on
/// construction. Searches address players by `(category, local index)`
/// into these lists. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPool {
    by_category: [Vec<Player>; Category::COUNT],
}

impl PlayerPool {
    /// Groups players by category and sorts each group by efficiency.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self::with_ranking(players, RankBy::Efficiency)
    }

    /// Groups players by category and sorts each group with `rank`.
    pub fn with_ranking(players: impl IntoIterator<Item = Player>, rank: RankBy) -> Self {
        let mut by_category: [Vec<Player>; Category::COUNT] = Default::default();
        for player in players {
            by_category[player.category.index()].push(player);
        }
        for group in &mut by_category {
            rank.sort(group);
        }
        Self { by_category }
    }

    /// Candidates of one category, in pool order.
    #[inline]
    pub fn category(&self, category: Category) -> &[Player] {
        &self.by_category[category.index()]
    }

    /// Player at `index` within `category`.
    #[inline]
    pub fn get(&self, category: Category, index: usize) -> Option<&Player> {
        self.by_category[category.index()].get(index)
    }

    /// Total number of players.
    pub fn len(&self) -> usize {
        self.by_category.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.iter().all(Vec::is_empty)
    }

    /// Iterates over every player, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.by_category.iter().flatten()
    }
}

impl FromIterator<Player> for PlayerPool {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter)
    }
}
