//! Ranking strategies for player sequences.

use crate::model::Player;
use std::cmp::Ordering;

/// Strategy used to order a sequence of players.
///
/// # Examples
///
/// ```
/// use u_roster::model::{Category, Player};
/// use u_roster::ordering::RankBy;
///
/// let mut players = vec![
///     Player::new("cheap", Category::Defender, 2, 2),
///     Player::new("star", Category::Defender, 4, 12),
///     Player::new("bench", Category::Defender, 1, 0),
/// ];
/// RankBy::Efficiency.sort(&mut players);
/// let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["star", "cheap", "bench"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RankBy {
    /// Score/price descending. Zero-score players come last, ordered by
    /// ascending price among themselves.
    #[default]
    Efficiency,

    /// Score descending, then price ascending.
    Score,

    /// Position in [`Category::ALL`](crate::model::Category::ALL) order.
    Category,
}

impl RankBy {
    /// Compares two players; `Less` means `a` ranks before `b`.
    pub fn compare(self, a: &Player, b: &Player) -> Ordering {
        match self {
            RankBy::Efficiency => compare_efficiency(a, b),
            RankBy::Score => b.score.cmp(&a.score).then(a.price.cmp(&b.price)),
            RankBy::Category => a.category.index().cmp(&b.category.index()),
        }
    }

    /// Sorts players in place (stable).
    pub fn sort(self, players: &mut [Player]) {
        players.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns indices into `players` in ranked order, leaving the slice
    /// untouched.
    pub fn sort_indices(self, players: &[Player]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..players.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&players[a], &players[b]));
        indices
    }

    /// Returns references in ranked order.
    pub fn sorted<'a>(self, players: &'a [Player]) -> Vec<&'a Player> {
        self.sort_indices(players)
            .into_iter()
            .map(|i| &players[i])
            .collect()
    }
}

/// Exact ratio comparison by cross-multiplication: `a.score / a.price`
/// against `b.score / b.price` without going through floating point.
fn compare_efficiency(a: &Player, b: &Player) -> Ordering {
    match (a.score == 0, b.score == 0) {
        (true, true) => a.price.cmp(&b.price),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let lhs = a.score as u128 * b.price as u128;
            let rhs = b.score as u128 * a.price as u128;
            rhs.cmp(&lhs)
        }
    }
}
