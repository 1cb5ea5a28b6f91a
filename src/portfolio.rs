//! Running both engines and merging their answers.
//!
//! Each engine gets its own [`SolutionState`](crate::state::SolutionState)
//! and incumbent over the same read-only pool and constraints. With the
//! `parallel` feature the two runs execute concurrently via `rayon::join`.

use crate::error::Result;
use crate::exact::{ExactConfig, ExactResult, ExactRunner};
use crate::model::{Constraints, PlayerPool};
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::sink::SolutionSink;
use crate::state::Roster;
use tracing::info;

/// Which engine produced a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Engine {
    Exact,
    Anneal,
}

/// Outcome of both runs.
#[derive(Debug)]
pub struct PortfolioResult {
    pub exact: Result<ExactResult>,
    pub anneal: Result<SaResult>,
}

impl PortfolioResult {
    /// The higher-scoring roster of the two runs; the exact one on ties.
    pub fn best(&self) -> Option<(Engine, &Roster)> {
        let exact = self
            .exact
            .as_ref()
            .ok()
            .and_then(|r| r.best.as_ref())
            .map(|r| (Engine::Exact, r));
        let anneal = self.anneal.as_ref().ok().map(|r| (Engine::Anneal, &r.best));
        match (exact, anneal) {
            (Some(e), Some(a)) => Some(if a.1.score > e.1.score { a } else { e }),
            (e, a) => e.or(a),
        }
    }

    /// Whether the merged answer is certified optimal.
    pub fn is_optimal(&self) -> bool {
        self.exact.as_ref().is_ok_and(ExactResult::is_optimal)
    }
}

/// Portfolio settings: one config per engine.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PortfolioConfig {
    pub exact: ExactConfig,
    pub anneal: SaConfig,
}

/// Runs the exact search and the annealer independently and returns both
/// results.
///
/// # Examples
///
/// ```
/// use u_roster::model::{Category, Constraints, Player, PlayerPool, Quotas};
/// use u_roster::portfolio::{solve, Engine, PortfolioConfig};
/// use u_roster::sa::SaConfig;
/// use u_roster::sink::NoopSink;
///
/// let pool = PlayerPool::new(vec![
///     Player::new("G", Category::Goalkeeper, 5, 10),
///     Player::new("D", Category::Defender, 4, 8),
/// ]);
/// let constraints = Constraints::new(Quotas::new(1, 0, 0), 10, 10);
/// let config = PortfolioConfig {
///     anneal: SaConfig::default().with_max_rounds(10).with_seed(1),
///     ..PortfolioConfig::default()
/// };
/// let result = solve(&pool, &constraints, &config, &mut NoopSink, &mut NoopSink);
/// let (engine, best) = result.best().unwrap();
/// assert_eq!(engine, Engine::Exact);
/// assert_eq!(best.score, 18);
/// ```
pub fn solve<E, A>(
    pool: &PlayerPool,
    constraints: &Constraints,
    config: &PortfolioConfig,
    exact_sink: &mut E,
    anneal_sink: &mut A,
) -> PortfolioResult
where
    E: SolutionSink + Send + ?Sized,
    A: SolutionSink + Send + ?Sized,
{
    #[cfg(feature = "parallel")]
    let (exact, anneal) = rayon::join(
        || ExactRunner::run(pool, constraints, &config.exact, exact_sink),
        || SaRunner::run(pool, constraints, &config.anneal, anneal_sink),
    );
    #[cfg(not(feature = "parallel"))]
    let (exact, anneal) = (
        ExactRunner::run(pool, constraints, &config.exact, exact_sink),
        SaRunner::run(pool, constraints, &config.anneal, anneal_sink),
    );

    let result = PortfolioResult { exact, anneal };
    info!(
        event = "portfolio_end",
        winner = ?result.best().map(|(engine, _)| engine),
        score = result.best().map(|(_, r)| r.score),
        optimal = result.is_optimal(),
    );
    result
}
