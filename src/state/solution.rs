//! Incremental search state.

use crate::error::{Result, RosterError};
use crate::model::{Category, Constraints, Player, PlayerPool};

use super::roster::Roster;

/// A selected player, addressed by category and index into the pool's
/// list for that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub category: Category,
    pub index: usize,
}

/// Mutable partial roster driven by one search loop.
///
/// Tracks the selected slots in insertion order, a used marker per
/// `(category, index)`, a count per category, and running price and score.
/// All of it changes only through [`push`](Self::push), its inverse
/// [`pop`](Self::pop), and the annealer's [`swap`](Self::swap), each O(1).
///
/// Invariants after every operation:
/// - `price()` is the summed price of the selected players;
/// - `score()` is their summed score;
/// - `count(c)` is the number of selected players of category `c`
///   and never exceeds its quota.
///
/// # Examples
///
/// ```
/// use u_roster::model::{Category, Constraints, Player, PlayerPool, Quotas};
/// use u_roster::state::SolutionState;
///
/// let pool = PlayerPool::new(vec![Player::new("G", Category::Goalkeeper, 5, 10)]);
/// let constraints = Constraints::new(Quotas::new(0, 0, 0), 10, 10);
/// let mut state = SolutionState::new(&pool, constraints);
///
/// state.push(Category::Goalkeeper, 0).unwrap();
/// assert!(state.is_complete() && state.is_feasible());
/// assert_eq!(state.score(), 10);
///
/// state.pop().unwrap();
/// assert_eq!(state.price(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionState<'p> {
    pool: &'p PlayerPool,
    constraints: Constraints,
    slots: Vec<Slot>,
    used: [Vec<bool>; Category::COUNT],
    counts: [usize; Category::COUNT],
    price: u64,
    score: u64,
}

impl<'p> SolutionState<'p> {
    /// Creates an empty state over `pool`.
    pub fn new(pool: &'p PlayerPool, constraints: Constraints) -> Self {
        let used = Category::ALL.map(|c| vec![false; pool.category(c).len()]);
        // Quotas are unchecked input; a roster never outgrows the pool.
        let capacity = constraints.quotas.roster_size().min(pool.len());
        Self {
            pool,
            constraints,
            slots: Vec::with_capacity(capacity),
            used,
            counts: [0; Category::COUNT],
            price: 0,
            score: 0,
        }
    }

    #[inline]
    pub fn pool(&self) -> &'p PlayerPool {
        self.pool
    }

    #[inline]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Selected slots in insertion order.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of selected players of `category`.
    #[inline]
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Unfilled slots of `category`.
    #[inline]
    pub fn remaining(&self, category: Category) -> usize {
        self.constraints.quota(category) - self.counts[category.index()]
    }

    /// Running total price.
    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Running total score.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn is_used(&self, category: Category, index: usize) -> bool {
        self.used[category.index()]
            .get(index)
            .copied()
            .unwrap_or(false)
    }

    /// Player occupying `slot`.
    ///
    /// Slots obtained from [`slots`](Self::slots) always resolve.
    pub fn player(&self, slot: Slot) -> Option<&'p Player> {
        self.pool.get(slot.category, slot.index)
    }

    /// Selected players in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &'p Player> + '_ {
        let pool = self.pool;
        self.slots
            .iter()
            .filter_map(move |s| pool.get(s.category, s.index))
    }

    /// Selects the unused player at `index` of `category`.
    ///
    /// # Errors
    ///
    /// [`RosterError::PreconditionViolation`] if the index is out of range,
    /// the player is already selected, or the category is at quota. The
    /// state is left untouched.
    pub fn push(&mut self, category: Category, index: usize) -> Result<()> {
        let player = self.pool.get(category, index).ok_or_else(|| {
            RosterError::PreconditionViolation(format!(
                "push: index {index} out of range for {category}"
            ))
        })?;
        let c = category.index();
        if self.used[c][index] {
            return Err(RosterError::PreconditionViolation(format!(
                "push: {} ({category}#{index}) already selected",
                player.name
            )));
        }
        if self.counts[c] >= self.constraints.quota(category) {
            return Err(RosterError::PreconditionViolation(format!(
                "push: {category} already at quota {}",
                self.constraints.quota(category)
            )));
        }

        self.used[c][index] = true;
        self.slots.push(Slot { category, index });
        self.counts[c] += 1;
        self.price += player.price;
        self.score += player.score;
        Ok(())
    }

    /// Undoes the most recent [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// [`RosterError::PreconditionViolation`] if nothing has been pushed.
    pub fn pop(&mut self) -> Result<Slot> {
        let slot = self
            .slots
            .pop()
            .ok_or_else(|| RosterError::PreconditionViolation("pop: state is empty".into()))?;
        let player = &self.pool.category(slot.category)[slot.index];
        let c = slot.category.index();
        self.used[c][slot.index] = false;
        self.counts[c] -= 1;
        self.price -= player.price;
        self.score -= player.score;
        Ok(slot)
    }

    /// Replaces the player in slot position `position` with the unused
    /// candidate `new_index` of the same category. Returns the replaced slot.
    ///
    /// Budget and price cap are the caller's concern, as with `push`.
    ///
    /// # Errors
    ///
    /// [`RosterError::PreconditionViolation`] on an out-of-range position
    /// or index, or when the candidate is already selected.
    pub fn swap(&mut self, position: usize, new_index: usize) -> Result<Slot> {
        let old = *self.slots.get(position).ok_or_else(|| {
            RosterError::PreconditionViolation(format!("swap: no slot at position {position}"))
        })?;
        let category = old.category;
        let incoming = self.pool.get(category, new_index).ok_or_else(|| {
            RosterError::PreconditionViolation(format!(
                "swap: index {new_index} out of range for {category}"
            ))
        })?;
        let c = category.index();
        if self.used[c][new_index] {
            return Err(RosterError::PreconditionViolation(format!(
                "swap: {} ({category}#{new_index}) already selected",
                incoming.name
            )));
        }
        let outgoing = &self.pool.category(category)[old.index];

        self.used[c][old.index] = false;
        self.used[c][new_index] = true;
        self.price = self.price - outgoing.price + incoming.price;
        self.score = self.score - outgoing.score + incoming.score;
        self.slots[position].index = new_index;
        Ok(old)
    }

    /// True iff every category count equals its quota.
    pub fn is_complete(&self) -> bool {
        Category::ALL
            .iter()
            .all(|&c| self.counts[c.index()] == self.constraints.quota(c))
    }

    /// True iff the running price is within the total budget.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.price <= self.constraints.total_budget
    }

    /// Recomputes every derived quantity from the selected slots and
    /// compares it with the running values.
    pub fn check_invariants(&self) -> bool {
        let mut counts = [0usize; Category::COUNT];
        let mut price = 0u64;
        let mut score = 0u64;
        let mut marked = 0usize;
        for slot in &self.slots {
            let Some(player) = self.player(*slot) else {
                return false;
            };
            if !self.used[slot.category.index()][slot.index] {
                return false;
            }
            counts[slot.category.index()] += 1;
            price += player.price;
            score += player.score;
        }
        for used in &self.used {
            marked += used.iter().filter(|&&u| u).count();
        }
        counts == self.counts
            && price == self.price
            && score == self.score
            && marked == self.slots.len()
            && Category::ALL
                .iter()
                .all(|&c| counts[c.index()] <= self.constraints.quota(c))
    }

    /// Owned snapshot of the current selection.
    pub fn to_roster(&self) -> Roster {
        Roster {
            players: self.players().cloned().collect(),
            score: self.score,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quotas;

    fn pool() -> PlayerPool {
        PlayerPool::new(vec![
            Player::new("G1", Category::Goalkeeper, 5, 10),
            Player::new("G2", Category::Goalkeeper, 1, 1),
            Player::new("D1", Category::Defender, 4, 8),
            Player::new("D2", Category::Defender, 3, 6),
            Player::new("D3", Category::Defender, 6, 4),
        ])
    }

    fn constraints() -> Constraints {
        Constraints::new(Quotas::new(2, 0, 0), 12, 10)
    }

    #[test]
    fn test_push_updates_totals() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Defender, 0).unwrap();
        state.push(Category::Goalkeeper, 0).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.count(Category::Defender), 1);
        assert_eq!(state.remaining(Category::Defender), 1);
        assert_eq!(state.price(), pool.category(Category::Defender)[0].price + 5);
        assert!(state.check_invariants());
    }

    #[test]
    fn test_push_used_rejected() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Defender, 1).unwrap();
        let before = state.clone();
        let err = state.push(Category::Defender, 1).unwrap_err();
        assert!(matches!(err, RosterError::PreconditionViolation(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_push_over_quota_rejected() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Goalkeeper, 0).unwrap();
        assert!(matches!(
            state.push(Category::Goalkeeper, 1),
            Err(RosterError::PreconditionViolation(_))
        ));
        assert_eq!(state.count(Category::Goalkeeper), 1);
    }

    #[test]
    fn test_push_out_of_range_rejected() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        assert!(state.push(Category::Striker, 0).is_err());
        assert!(state.push(Category::Defender, 3).is_err());
        assert!(state.is_empty());
    }

    #[test]
    fn test_pop_empty_rejected() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        assert!(matches!(
            state.pop(),
            Err(RosterError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_push_pop_restores_exactly() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Goalkeeper, 1).unwrap();
        let before = state.clone();
        state.push(Category::Defender, 2).unwrap();
        let popped = state.pop().unwrap();
        assert_eq!(popped, Slot { category: Category::Defender, index: 2 });
        assert_eq!(state, before);
    }

    #[test]
    fn test_complete_and_feasible() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        assert!(!state.is_complete());
        state.push(Category::Goalkeeper, 0).unwrap();
        state.push(Category::Defender, 0).unwrap();
        assert!(!state.is_complete());
        state.push(Category::Defender, 1).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.is_feasible(), state.price() <= 12);
    }

    #[test]
    fn test_swap_replaces_player() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Goalkeeper, 0).unwrap();
        state.push(Category::Defender, 0).unwrap();
        let old = state.swap(1, 2).unwrap();
        assert_eq!(old.index, 0);
        assert!(state.is_used(Category::Defender, 2));
        assert!(!state.is_used(Category::Defender, 0));
        let expected = 5 + pool.category(Category::Defender)[2].price;
        assert_eq!(state.price(), expected);
        assert!(state.check_invariants());
    }

    #[test]
    fn test_swap_to_used_rejected() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Defender, 0).unwrap();
        state.push(Category::Defender, 1).unwrap();
        assert!(state.swap(0, 1).is_err());
        assert!(state.swap(5, 2).is_err());
        assert!(state.check_invariants());
    }

    #[test]
    fn test_to_roster() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Goalkeeper, 0).unwrap();
        let roster = state.to_roster();
        assert_eq!(roster.players.len(), 1);
        assert_eq!(roster.score, 10);
        assert_eq!(roster.price, 5);
    }
}
