//! Greedy construction of the starting roster.

use crate::error::{Result, RosterError};
use crate::model::Category;
use crate::state::SolutionState;

/// Fills every category quota of `state` greedily.
///
/// Categories are processed in [`Category::ALL`] order. Within a category
/// candidates are scanned in pool order (efficiency descending) and the
/// first unused player within the price cap that keeps the running price
/// within budget is taken, until the quota is met.
///
/// # Errors
///
/// [`RosterError::ConstructionInfeasible`] naming the first category that
/// cannot be filled. `state` is left holding the partial roster.
pub fn construct_greedy(state: &mut SolutionState<'_>) -> Result<()> {
    let pool = state.pool();
    let constraints = *state.constraints();

    for category in Category::ALL {
        let candidates = pool.category(category);
        // Running price only grows, so a candidate that did not fit once
        // never fits later in this category.
        let mut cursor = 0;
        while state.remaining(category) > 0 {
            let next = candidates
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|&(index, player)| {
                    !state.is_used(category, index)
                        && constraints.within_cap(player.price)
                        && state.price() + player.price <= constraints.total_budget
                })
                .map(|(index, _)| index);

            match next {
                Some(index) => {
                    state.push(category, index)?;
                    cursor = index + 1;
                }
                None => return Err(RosterError::ConstructionInfeasible { category }),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Constraints, Player, PlayerPool, Quotas};

    #[test]
    fn test_takes_most_efficient_first() {
        let pool = PlayerPool::new(vec![
            Player::new("G", Category::Goalkeeper, 2, 4),
            Player::new("Dslow", Category::Defender, 10, 5),
            Player::new("Dfast", Category::Defender, 1, 5),
        ]);
        let constraints = Constraints::new(Quotas::new(1, 0, 0), 100, 100);
        let mut state = SolutionState::new(&pool, constraints);
        construct_greedy(&mut state).unwrap();

        assert!(state.is_complete());
        let roster = state.to_roster();
        assert!(roster.contains(Category::Defender, "Dfast"));
    }

    #[test]
    fn test_skips_players_over_budget_and_cap() {
        let pool = PlayerPool::new(vec![
            Player::new("G", Category::Goalkeeper, 5, 10),
            Player::new("Dcap", Category::Defender, 20, 100),
            Player::new("Dbudget", Category::Defender, 9, 40),
            Player::new("Dfit", Category::Defender, 4, 4),
        ]);
        let constraints = Constraints::new(Quotas::new(1, 0, 0), 12, 15);
        let mut state = SolutionState::new(&pool, constraints);
        construct_greedy(&mut state).unwrap();

        let roster = state.to_roster();
        assert!(roster.contains(Category::Defender, "Dfit"));
        assert_eq!(roster.price, 9);
    }

    #[test]
    fn test_infeasible_reports_category() {
        let pool = PlayerPool::new(vec![
            Player::new("G", Category::Goalkeeper, 5, 10),
            Player::new("D", Category::Defender, 4, 8),
        ]);
        let constraints = Constraints::new(Quotas::new(2, 0, 0), 100, 100);
        let mut state = SolutionState::new(&pool, constraints);
        let err = construct_greedy(&mut state).unwrap_err();

        assert!(matches!(
            err,
            RosterError::ConstructionInfeasible {
                category: Category::Defender
            }
        ));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_empty_pool_fails_on_goalkeeper() {
        let pool = PlayerPool::default();
        let constraints = Constraints::new(Quotas::new(0, 0, 0), 100, 100);
        let mut state = SolutionState::new(&pool, constraints);
        assert!(matches!(
            construct_greedy(&mut state),
            Err(RosterError::ConstructionInfeasible {
                category: Category::Goalkeeper
            })
        ));
    }
}
