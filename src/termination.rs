//! Cooperative search budgets.
//!
//! A [`Termination`] combines a wall-clock limit, an iteration limit and an
//! external cancellation flag. Engines call [`Termination::should_stop`] at
//! their safe points; the clock is only read every `clock_check_mask + 1`
//! calls to keep the check cheap inside tight loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a search stopped before exhausting its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    TimeLimit,
    IterationLimit,
    Cancelled,
}

/// Budget tracker for one run.
#[derive(Debug, Clone)]
pub struct Termination {
    start: Instant,
    time_limit: Option<Duration>,
    max_iterations: u64,
    cancel: Option<Arc<AtomicBool>>,
    clock_check_mask: u64,
    calls: u64,
    stopped: Option<StopReason>,
}

impl Termination {
    /// Check the clock every 1024 calls.
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FF;

    /// Starts the clock. `max_iterations == 0` means no iteration limit.
    pub fn new(time_limit: Option<Duration>, max_iterations: u64) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            max_iterations,
            cancel: None,
            clock_check_mask: Self::DEFAULT_CLOCK_CHECK_MASK,
            calls: 0,
            stopped: None,
        }
    }

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self::new(None, 0)
    }

    /// Attaches an external cancellation flag.
    pub fn with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Reads the clock every `mask + 1` calls; `mask` should be `2^k - 1`.
    pub fn with_clock_check_mask(mut self, mask: u64) -> Self {
        self.clock_check_mask = mask;
        self
    }

    /// Time since the run started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The reason recorded by the first positive [`should_stop`](Self::should_stop).
    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Returns `true` once any limit is hit, and keeps returning `true`.
    ///
    /// `iterations` is the engine's own progress counter (nodes for the
    /// exact search, rounds for the annealer).
    pub fn should_stop(&mut self, iterations: u64) -> bool {
        if self.stopped.is_some() {
            return true;
        }
        if self.max_iterations > 0 && iterations >= self.max_iterations {
            self.stopped = Some(StopReason::IterationLimit);
            return true;
        }
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stopped = Some(StopReason::Cancelled);
                return true;
            }
        }
        let check_clock = self.calls & self.clock_check_mask == 0;
        self.calls = self.calls.wrapping_add(1);
        if check_clock {
            if let Some(limit) = self.time_limit {
                if self.start.elapsed() >= limit {
                    self.stopped = Some(StopReason::TimeLimit);
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Termination {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Converts a millisecond setting where 0 means "no limit".
pub(crate) fn limit_from_ms(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}
