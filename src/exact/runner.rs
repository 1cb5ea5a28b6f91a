//! Branch-and-bound execution.
//!
//! # Algorithm
//!
//! Categories are filled one at a time in [`Category::ALL`] order. Within a
//! category the recursion picks an increasing sequence of pool indices
//! (a combination), carrying a cursor so every subset is visited exactly
//! once rather than once per ordering. When the quota is filled it moves on
//! to the next category with a fresh cursor.
//!
//! Before descending into a candidate:
//! 1. players above the price cap are skipped;
//! 2. players that would push the running price over the budget are skipped
//!    (prices only accumulate, so no deeper node could recover);
//! 3. the loop stops once fewer untried candidates remain than unfilled
//!    slots in the category;
//! 4. optionally, the node is cut when an optimistic score bound cannot
//!    beat the incumbent.
//!
//! A complete, feasible roster that strictly beats the incumbent is
//! installed and reported. Equal scores are dropped, so the first roster
//! found at a score wins.

use super::config::ExactConfig;
use crate::error::{Result, RosterError};
use crate::model::{Category, Constraints, PlayerPool};
use crate::sink::SolutionSink;
use crate::state::{Incumbent, Roster, SolutionState};
use crate::termination::{limit_from_ms, StopReason, Termination};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How an exact search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The space was exhausted; the incumbent is a certified optimum.
    Optimal,
    /// The space was exhausted without completing any feasible roster.
    Infeasible,
    /// A budget or cancellation stopped the search early.
    Interrupted(StopReason),
}

/// Result of an exact search.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Best roster found, if any.
    pub best: Option<Roster>,
    pub status: SearchStatus,
    /// Number of selections made (search nodes).
    pub nodes: u64,
    /// Number of complete rosters evaluated, feasible or not.
    pub complete_rosters: u64,
    /// Number of reported improvements.
    pub improvements: usize,
    pub elapsed: Duration,
}

impl ExactResult {
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }

    /// The best roster, or [`RosterError::NoFeasibleSolution`] when none
    /// was found.
    pub fn into_best(self) -> Result<Roster> {
        self.best.ok_or(RosterError::NoFeasibleSolution)
    }
}

/// Executes the exact search.
pub struct ExactRunner;

impl ExactRunner {
    /// Runs the search to exhaustion or until the configured budget runs
    /// out, reporting each strict improvement to `sink`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roster::exact::{ExactConfig, ExactRunner};
    /// use u_roster::model::{Category, Constraints, Player, PlayerPool, Quotas};
    /// use u_roster::sink::NoopSink;
    ///
    /// let pool = PlayerPool::new(vec![
    ///     Player::new("G", Category::Goalkeeper, 5, 10),
    ///     Player::new("D", Category::Defender, 4, 8),
    /// ]);
    /// let constraints = Constraints::new(Quotas::new(1, 0, 0), 10, 10);
    /// let result = ExactRunner::run(&pool, &constraints, &ExactConfig::default(), &mut NoopSink).unwrap();
    /// assert!(result.is_optimal());
    /// assert_eq!(result.best.unwrap().score, 18);
    /// ```
    pub fn run<K: SolutionSink + ?Sized>(
        pool: &PlayerPool,
        constraints: &Constraints,
        config: &ExactConfig,
        sink: &mut K,
    ) -> Result<ExactResult> {
        Self::run_with_cancel(pool, constraints, config, sink, None)
    }

    /// Runs the search with an optional cancellation token.
    pub fn run_with_cancel<K: SolutionSink + ?Sized>(
        pool: &PlayerPool,
        constraints: &Constraints,
        config: &ExactConfig,
        sink: &mut K,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExactResult> {
        info!(
            event = "search_start",
            engine = "exact",
            players = pool.len(),
            roster_size = constraints.quotas.roster_size(),
            total_budget = constraints.total_budget,
            price_cap = constraints.price_cap,
        );

        let termination =
            Termination::new(limit_from_ms(config.time_limit_ms), config.max_nodes).with_cancel(cancel);
        let bounds = config
            .bound_pruning
            .then(|| ScoreBounds::new(pool, constraints));

        let mut search = Search {
            state: SolutionState::new(pool, *constraints),
            incumbent: Incumbent::new(),
            termination,
            sink,
            bounds,
            nodes: 0,
            complete_rosters: 0,
            improvements: 0,
        };
        search.descend(0, 0)?;

        let status = match (search.termination.stop_reason(), search.incumbent.best()) {
            (Some(reason), _) => SearchStatus::Interrupted(reason),
            (None, Some(_)) => SearchStatus::Optimal,
            (None, None) => SearchStatus::Infeasible,
        };
        let elapsed = search.termination.elapsed();

        info!(
            event = "search_end",
            engine = "exact",
            status = ?status,
            nodes = search.nodes,
            complete_rosters = search.complete_rosters,
            improvements = search.improvements,
            score = search.incumbent.score(),
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(ExactResult {
            best: search.incumbent.into_best(),
            status,
            nodes: search.nodes,
            complete_rosters: search.complete_rosters,
            improvements: search.improvements,
            elapsed,
        })
    }
}

struct Search<'s, 'p, K: ?Sized> {
    state: SolutionState<'p>,
    incumbent: Incumbent,
    termination: Termination,
    sink: &'s mut K,
    bounds: Option<ScoreBounds>,
    nodes: u64,
    complete_rosters: u64,
    improvements: usize,
}

impl<K: SolutionSink + ?Sized> Search<'_, '_, K> {
    fn descend(&mut self, order_pos: usize, cursor: usize) -> Result<()> {
        if self.state.is_complete() {
            self.on_complete();
            return Ok(());
        }

        let Some(&category) = Category::ALL.get(order_pos) else {
            return Ok(());
        };
        let remaining = self.state.remaining(category);
        if remaining == 0 {
            return self.descend(order_pos + 1, 0);
        }
        if self.cut_by_bound() {
            return Ok(());
        }

        let pool = self.state.pool();
        let constraints = *self.state.constraints();
        let candidates = pool.category(category);

        for (index, player) in candidates.iter().enumerate().skip(cursor) {
            if candidates.len() - index < remaining {
                break;
            }
            if self.termination.should_stop(self.nodes) {
                break;
            }
            if !constraints.within_cap(player.price)
                || self.state.price() + player.price > constraints.total_budget
            {
                continue;
            }

            self.state.push(category, index)?;
            self.nodes += 1;
            self.descend(order_pos, index + 1)?;
            self.state.pop()?;
        }
        Ok(())
    }

    fn on_complete(&mut self) {
        self.complete_rosters += 1;
        if let Some(roster) = self.incumbent.try_install(&self.state) {
            self.improvements += 1;
            let elapsed = self.termination.elapsed();
            debug!(
                event = "improvement",
                engine = "exact",
                score = roster.score,
                price = roster.price,
                nodes = self.nodes,
            );
            self.sink.report(roster, elapsed);
        }
        self.termination.should_stop(self.nodes);
    }

    fn cut_by_bound(&self) -> bool {
        match (&self.bounds, self.incumbent.score()) {
            (Some(bounds), Some(best)) => bounds.optimistic(&self.state) <= best,
            _ => false,
        }
    }
}

/// Per-category prefix sums of the best scores among players within the
/// price cap. `prefix[c][k]` is the sum of the `k` highest scores.
#[derive(Debug, Clone)]
struct ScoreBounds {
    prefix: [Vec<u64>; Category::COUNT],
}

impl ScoreBounds {
    fn new(pool: &PlayerPool, constraints: &Constraints) -> Self {
        let prefix = Category::ALL.map(|c| {
            let mut scores: Vec<u64> = pool
                .category(c)
                .iter()
                .filter(|p| constraints.within_cap(p.price))
                .map(|p| p.score)
                .collect();
            scores.sort_unstable_by(|a, b| b.cmp(a));
            let mut sums = Vec::with_capacity(scores.len() + 1);
            sums.push(0);
            let mut acc = 0u64;
            for s in scores {
                acc += s;
                sums.push(acc);
            }
            sums
        });
        Self { prefix }
    }

    /// Upper bound on the score of any completion of `state`.
    fn optimistic(&self, state: &SolutionState<'_>) -> u64 {
        Category::ALL.iter().fold(state.score(), |acc, &c| {
            let sums = &self.prefix[c.index()];
            let k = state.remaining(c).min(sums.len() - 1);
            acc + sums[k]
        })
    }
}
