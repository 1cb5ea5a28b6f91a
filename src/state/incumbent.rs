//! Best-so-far tracking for one search run.

use super::roster::Roster;
use super::solution::SolutionState;

/// The best complete, feasible roster seen by one run.
///
/// A candidate replaces the incumbent only when its score is strictly
/// greater, so the first roster reaching a given score wins and later
/// equal-score rosters are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Incumbent {
    best: Option<Roster>,
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of the incumbent, if any.
    #[inline]
    pub fn score(&self) -> Option<u64> {
        self.best.as_ref().map(|r| r.score)
    }

    #[inline]
    pub fn best(&self) -> Option<&Roster> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<Roster> {
        self.best
    }

    /// Whether a complete roster scoring `score` would replace the incumbent.
    #[inline]
    pub fn improves(&self, score: u64) -> bool {
        self.score().is_none_or(|best| score > best)
    }

    /// Installs a snapshot of `state` if it is complete, feasible and a
    /// strict improvement. Returns the newly installed roster.
    pub fn try_install(&mut self, state: &SolutionState<'_>) -> Option<&Roster> {
        if !state.is_complete() || !state.is_feasible() || !self.improves(state.score()) {
            return None;
        }
        self.best = Some(state.to_roster());
        self.best.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Constraints, Player, PlayerPool, Quotas};

    fn pool() -> PlayerPool {
        PlayerPool::new(vec![
            Player::new("G1", Category::Goalkeeper, 5, 10),
            Player::new("G2", Category::Goalkeeper, 5, 10),
            Player::new("G3", Category::Goalkeeper, 1, 20),
            Player::new("G4", Category::Goalkeeper, 50, 99),
        ])
    }

    fn constraints() -> Constraints {
        Constraints::new(Quotas::new(0, 0, 0), 10, 100)
    }

    #[test]
    fn test_first_install() {
        let pool = pool();
        let mut state = SolutionState::new(&pool, constraints());
        let mut inc = Incumbent::new();
        assert!(inc.try_install(&state).is_none(), "incomplete state");
        state.push(Category::Goalkeeper, 0).unwrap();
        assert!(inc.try_install(&state).is_some());
        assert!(inc.score().is_some());
    }

    #[test]
    fn test_ties_not_installed() {
        let pool = pool();
        let gk = pool.category(Category::Goalkeeper);
        let tied: Vec<usize> = (0..gk.len()).filter(|&i| gk[i].score == 10).collect();
        let mut state = SolutionState::new(&pool, constraints());
        let mut inc = Incumbent::new();

        state.push(Category::Goalkeeper, tied[0]).unwrap();
        assert!(inc.try_install(&state).is_some());
        state.pop().unwrap();
        state.push(Category::Goalkeeper, tied[1]).unwrap();
        assert!(inc.try_install(&state).is_none());
        assert_eq!(inc.best().unwrap().players[0].name, gk[tied[0]].name);
    }

    #[test]
    fn test_infeasible_not_installed() {
        let pool = pool();
        let expensive = pool
            .category(Category::Goalkeeper)
            .iter()
            .position(|p| p.name == "G4")
            .unwrap();
        let mut state = SolutionState::new(&pool, constraints());
        state.push(Category::Goalkeeper, expensive).unwrap();
        let mut inc = Incumbent::new();
        assert!(inc.try_install(&state).is_none());
        assert!(inc.into_best().is_none());
    }

    #[test]
    fn test_improves() {
        let inc = Incumbent::new();
        assert!(inc.improves(0));
    }
}
