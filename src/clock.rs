//! Quantum clock: deciding when the current slice of work must yield.
//!
//! Sampling the clock is not free, so phases count matrix operations through
//! an [`OpThrottle`] and only consult the [`Quantum`] every `interval`
//! operations.

use std::time::{Duration, Instant};

/// Time elapsed since `start` on the monotonic clock.
#[inline]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// A single scheduling quantum: the instant a dispatch call began and the
/// wall-clock budget it may spend before handing control back.
#[derive(Debug, Clone, Copy)]
pub struct Quantum {
    started: Instant,
    budget: Duration,
}

impl Quantum {
    /// Open a quantum that starts now.
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        elapsed(self.started)
    }

    /// True once the budget is spent. A zero budget is exhausted immediately.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.elapsed() >= self.budget
    }
}

/// Counts matrix operations between clock samples.
#[derive(Debug, Clone)]
pub struct OpThrottle {
    interval: u64,
    since_check: u64,
}

impl OpThrottle {
    /// An interval of zero behaves like one: check after every operation.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            since_check: 0,
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Record one completed operation.
    ///
    /// Returns `true` when this operation closed an interval and the quantum
    /// turned out to be exhausted; the caller must suspend.
    #[inline]
    pub fn tick(&mut self, quantum: &Quantum) -> bool {
        self.since_check += 1;
        if self.since_check < self.interval {
            return false;
        }
        self.since_check = 0;
        quantum.is_exhausted()
    }
}
