//! Consumers of improved solutions.
//!
//! Both engines call [`SolutionSink::report`] once per strict improvement,
//! synchronously and with a complete, feasible snapshot. A slow sink stalls
//! the search; buffer on the caller side if that matters.

use crate::state::Roster;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Receives every new incumbent of a search run.
pub trait SolutionSink {
    /// Called with the new incumbent and the time elapsed since the search
    /// started.
    fn report(&mut self, roster: &Roster, elapsed: Duration);
}

impl<F> SolutionSink for F
where
    F: FnMut(&Roster, Duration),
{
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        self(roster, elapsed)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SolutionSink for NoopSink {
    fn report(&mut self, _roster: &Roster, _elapsed: Duration) {}
}

/// One reported improvement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Improvement {
    pub roster: Roster,
    pub elapsed: Duration,
}

/// Keeps every report in order.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    pub improvements: Vec<Improvement>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores in report order.
    pub fn scores(&self) -> Vec<u64> {
        self.improvements.iter().map(|i| i.roster.score).collect()
    }

    pub fn last(&self) -> Option<&Roster> {
        self.improvements.last().map(|i| &i.roster)
    }
}

impl SolutionSink for CollectSink {
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        self.improvements.push(Improvement {
            roster: roster.clone(),
            elapsed,
        });
    }
}

/// Logs each improvement at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SolutionSink for TracingSink {
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        tracing::info!(
            event = "improvement",
            score = roster.score,
            price = roster.price,
            elapsed_ms = elapsed.as_millis() as u64,
        );
    }
}

/// Forwards every report to two sinks, first `.0` then `.1`.
#[derive(Debug, Clone, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: SolutionSink, B: SolutionSink> SolutionSink for Tee<A, B> {
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        self.0.report(roster, elapsed);
        self.1.report(roster, elapsed);
    }
}

/// A sink shared by several runs, forwarding a report only when it beats
/// every roster forwarded before.
///
/// Each run keeps its own incumbent; this merges their report streams
/// into one strictly improving stream. Obtain a per-run handle with
/// [`handle`](Self::handle).
#[derive(Debug, Default)]
pub struct SharedSink<S> {
    inner: Mutex<Shared<S>>,
}

#[derive(Debug, Default)]
struct Shared<S> {
    sink: S,
    best: Option<u64>,
}

impl<S: SolutionSink> SharedSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Mutex::new(Shared { sink, best: None }),
        }
    }

    /// A sink handle for one run.
    pub fn handle(&self) -> SharedHandle<'_, S> {
        SharedHandle { shared: self }
    }

    /// Best score forwarded so far.
    pub fn best_score(&self) -> Option<u64> {
        self.lock().best
    }

    pub fn into_inner(self) -> S {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .sink
    }

    fn lock(&self) -> MutexGuard<'_, Shared<S>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Per-run handle to a [`SharedSink`].
#[derive(Debug)]
pub struct SharedHandle<'a, S> {
    shared: &'a SharedSink<S>,
}

impl<S: SolutionSink> SolutionSink for SharedHandle<'_, S> {
    fn report(&mut self, roster: &Roster, elapsed: Duration) {
        let mut guard = self.shared.lock();
        if guard.best.is_none_or(|best| roster.score > best) {
            guard.best = Some(roster.score);
            guard.sink.report(roster, elapsed);
        }
    }
}
