//! SA execution loop.

use super::config::SaConfig;
use super::construction::construct_greedy;
use crate::error::Result;
use crate::model::{Constraints, PlayerPool};
use crate::sink::SolutionSink;
use crate::state::{Incumbent, Roster, SolutionState};
use crate::termination::{limit_from_ms, StopReason, Termination};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Result of a construct + anneal run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best roster found.
    pub best: Roster,

    /// Number of improvement rounds executed.
    pub rounds: u64,

    /// Accepted swaps (improving and worsening).
    pub accepted_moves: u64,

    /// Accepted swaps that strictly increased the running score.
    pub improving_moves: u64,

    /// Reports sent to the sink, including the constructed roster.
    pub improvements: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// `None` when a round found no acceptable swap; otherwise the budget
    /// that interrupted the run.
    pub stopped: Option<StopReason>,

    /// Seed actually used, for replaying the run.
    pub seed: u64,

    pub elapsed: Duration,

    /// Incumbent score sampled every 100 rounds, plus the final value.
    pub score_history: Vec<u64>,
}

impl SaResult {
    /// Whether the run ended because no swap was acceptable.
    pub fn converged(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Executes greedy construction followed by simulated annealing.
pub struct SaRunner;

impl SaRunner {
    const HISTORY_INTERVAL: u64 = 100;

    /// Runs the metaheuristic, reporting each new incumbent to `sink`.
    ///
    /// # Errors
    ///
    /// - [`RosterError::InvalidConfig`](crate::RosterError::InvalidConfig)
    ///   if `config` fails validation;
    /// - [`RosterError::ConstructionInfeasible`](crate::RosterError::ConstructionInfeasible)
    ///   if greedy construction cannot produce a complete roster.
    pub fn run<K: SolutionSink + ?Sized>(
        pool: &PlayerPool,
        constraints: &Constraints,
        config: &SaConfig,
        sink: &mut K,
    ) -> Result<SaResult> {
        Self::run_with_cancel(pool, constraints, config, sink, None)
    }

    /// Runs the metaheuristic with an optional cancellation token.
    pub fn run_with_cancel<K: SolutionSink + ?Sized>(
        pool: &PlayerPool,
        constraints: &Constraints,
        config: &SaConfig,
        sink: &mut K,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            event = "search_start",
            engine = "anneal",
            players = pool.len(),
            roster_size = constraints.quotas.roster_size(),
            seed = seed,
        );

        let termination = Termination::new(limit_from_ms(config.time_limit_ms), config.max_rounds)
            .with_cancel(cancel)
            .with_clock_check_mask(0);

        let mut state = SolutionState::new(pool, *constraints);
        construct_greedy(&mut state)?;

        let mut annealer = Annealer {
            state,
            incumbent: Incumbent::new(),
            termination,
            sink,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            temperature: config.initial_temperature,
            accepted_moves: 0,
            improving_moves: 0,
            improvements: 0,
        };
        annealer.install();

        let mut rounds = 0u64;
        let mut score_history = vec![annealer.best_score()];

        while !annealer.termination.should_stop(rounds) {
            let accepted = annealer.round()?;
            rounds += 1;
            trace!(
                event = "round",
                round = rounds,
                accepted = accepted,
                score = annealer.state.score(),
                temperature = annealer.temperature,
            );
            if rounds % Self::HISTORY_INTERVAL == 0 {
                score_history.push(annealer.best_score());
            }
            if !accepted {
                break;
            }
        }

        let best_score = annealer.best_score();
        if score_history.last() != Some(&best_score) {
            score_history.push(best_score);
        }

        let stopped = annealer.termination.stop_reason();
        let elapsed = annealer.termination.elapsed();
        info!(
            event = "search_end",
            engine = "anneal",
            rounds = rounds,
            accepted_moves = annealer.accepted_moves,
            improvements = annealer.improvements,
            stopped = ?stopped,
            score = best_score,
            duration_ms = elapsed.as_millis() as u64,
        );

        let Annealer {
            incumbent,
            temperature,
            accepted_moves,
            improving_moves,
            improvements,
            state,
            ..
        } = annealer;
        // The constructed roster is complete and within budget, so the
        // incumbent is always set by now.
        let best = incumbent.into_best().unwrap_or_else(|| state.to_roster());

        Ok(SaResult {
            best,
            rounds,
            accepted_moves,
            improving_moves,
            improvements,
            final_temperature: temperature,
            stopped,
            seed,
            elapsed,
            score_history,
        })
    }
}

struct Annealer<'s, 'p, K: ?Sized> {
    state: SolutionState<'p>,
    incumbent: Incumbent,
    termination: Termination,
    sink: &'s mut K,
    rng: ChaCha8Rng,
    config: &'s SaConfig,
    temperature: f64,
    accepted_moves: u64,
    improving_moves: u64,
    improvements: usize,
}

impl<K: SolutionSink + ?Sized> Annealer<'_, '_, K> {
    fn best_score(&self) -> u64 {
        self.incumbent.score().unwrap_or(0)
    }

    /// Installs and reports the current state if it beats the incumbent.
    fn install(&mut self) {
        if let Some(roster) = self.incumbent.try_install(&self.state) {
            self.improvements += 1;
            debug!(
                event = "improvement",
                engine = "anneal",
                score = roster.score,
                price = roster.price,
            );
            self.sink.report(roster, self.termination.elapsed());
        }
    }

    /// One improvement round: visits the slots in random order and stops at
    /// the first accepted swap. Returns whether a swap was accepted.
    fn round(&mut self) -> Result<bool> {
        let mut order: Vec<usize> = (0..self.state.len()).collect();
        order.shuffle(&mut self.rng);

        for position in order {
            let accepted = self.try_slot(position)?;
            self.temperature = self.config.cooling.cool(self.temperature);
            if accepted {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Scans unused same-category candidates for the player at `position`
    /// and applies the first acceptable swap.
    fn try_slot(&mut self, position: usize) -> Result<bool> {
        let slot = self.state.slots()[position];
        let pool = self.state.pool();
        let constraints = *self.state.constraints();
        let candidates = pool.category(slot.category);
        let outgoing = &candidates[slot.index];

        let current_score = self.state.score();
        let base_price = self.state.price() - outgoing.price;
        let base_score = current_score - outgoing.score;

        for (index, candidate) in candidates.iter().enumerate() {
            if self.state.is_used(slot.category, index)
                || !constraints.within_cap(candidate.price)
                || base_price + candidate.price > constraints.total_budget
            {
                continue;
            }

            let new_score = base_score + candidate.score;
            let improving = new_score > current_score;
            if improving || self.metropolis(current_score - new_score) {
                self.state.swap(position, index)?;
                self.accepted_moves += 1;
                if improving {
                    self.improving_moves += 1;
                }
                self.install();
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Boltzmann acceptance of a swap losing `delta` points. Equal-score
    /// swaps and frozen temperatures never accept.
    fn metropolis(&mut self, delta: u64) -> bool {
        if delta == 0 || self.temperature <= self.config.min_temperature {
            return false;
        }
        let probability = (-(delta as f64) / self.temperature).exp();
        self.rng.random::<f64>() < probability
    }
}
