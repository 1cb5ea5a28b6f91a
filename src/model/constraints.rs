//! The query: per-position quotas, budget, and price cap.

use super::category::Category;

/// Required number of players per category.
///
/// The goalkeeper quota is fixed at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quotas([usize; Category::COUNT]);

impl Quotas {
    /// Quotas for a formation of `defenders`-`midfielders`-`strikers` plus
    /// one goalkeeper.
    pub const fn new(defenders: usize, midfielders: usize, strikers: usize) -> Self {
        Self([1, defenders, midfielders, strikers])
    }

    /// Quota of `category`.
    #[inline]
    pub const fn get(&self, category: Category) -> usize {
        self.0[category.index()]
    }

    /// Number of players in a complete roster, saturating at `usize::MAX`.
    pub fn roster_size(&self) -> usize {
        self.0.iter().fold(0usize, |acc, &q| acc.saturating_add(q))
    }
}

/// Immutable constraint set for one search.
///
/// # Examples
///
/// ```
/// use u_roster::model::{Category, Constraints, Quotas};
///
/// let constraints = Constraints::new(Quotas::new(4, 4, 2), 300, 60);
/// assert_eq!(constraints.quotas.roster_size(), 11);
/// assert_eq!(constraints.quota(Category::Goalkeeper), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    /// Required count per category.
    pub quotas: Quotas,
    /// Upper bound on the summed price of the roster.
    pub total_budget: u64,
    /// Upper bound on the price of any single player.
    pub price_cap: u64,
}

impl Constraints {
    pub fn new(quotas: Quotas, total_budget: u64, price_cap: u64) -> Self {
        Self {
            quotas,
            total_budget,
            price_cap,
        }
    }

    /// Shorthand for `self.quotas.get(category)`.
    #[inline]
    pub fn quota(&self, category: Category) -> usize {
        self.quotas.get(category)
    }

    /// Whether a single player of this price may be selected at all.
    #[inline]
    pub fn within_cap(&self, price: u64) -> bool {
        price <= self.price_cap
    }
}
