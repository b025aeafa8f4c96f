//! Chunked dispatch of distance computations.
//!
//! The scheduler never runs a computation to completion on its own. Each
//! [`Scheduler::step`] opens a fresh [`Quantum`], advances whichever phase
//! the checkpoint is in until the phase ends or the quantum runs out, and
//! reports either the final distance or that another call is needed. The
//! host decides when that next call happens, typically after letting its
//! other tasks run.
//!
//! ```
//! use yielding_lev::{Scheduler, Step};
//!
//! let scheduler = Scheduler::new();
//! let mut handle = scheduler.begin(b"kitten", b"sitting").unwrap();
//! let distance = loop {
//!     match scheduler.step(&mut handle) {
//!         Step::Done(d) => break d,
//!         Step::Continue => { /* let other work run */ }
//!     }
//! };
//! assert_eq!(distance, 3);
//! ```

use crate::checkpoint::{check_len, Checkpoint, Progress};
use crate::clock::Quantum;
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::phases::{fill, init, PhaseOutcome};

/// Result of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The computation finished with this distance.
    Done(u32),
    /// The quantum ran out; the checkpoint was updated in place.
    Continue,
}

/// Exclusive owner of one computation.
///
/// Dropping the handle, or calling [`Handle::release`], frees the checkpoint
/// and its matrix. Ownership rules out stepping a released handle.
#[derive(Debug, Clone)]
pub struct Handle {
    state: HandleState,
    steps: u64,
}

#[derive(Debug, Clone)]
enum HandleState {
    Running(Box<Checkpoint>),
    Done { distance: u32, cells: usize },
}

impl Handle {
    fn running(cp: Checkpoint) -> Self {
        Self {
            state: HandleState::Running(Box::new(cp)),
            steps: 0,
        }
    }

    fn done(distance: u32) -> Self {
        Self {
            state: HandleState::Done { distance, cells: 0 },
            steps: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, HandleState::Done { .. })
    }

    /// The distance, once a step has returned [`Step::Done`] (or the handle
    /// was created finished by the empty-input fast path).
    pub fn distance(&self) -> Option<u32> {
        match self.state {
            HandleState::Done { distance, .. } => Some(distance),
            HandleState::Running(_) => None,
        }
    }

    /// The live checkpoint. `None` once finished: the matrix is freed as soon
    /// as the distance is known.
    pub fn checkpoint(&self) -> Option<&Checkpoint> {
        match &self.state {
            HandleState::Running(cp) => Some(cp),
            HandleState::Done { .. } => None,
        }
    }

    pub fn progress(&self) -> Progress {
        match &self.state {
            HandleState::Running(cp) => cp.progress(),
            HandleState::Done { cells, .. } => Progress {
                cells_done: *cells,
                cells_total: *cells,
            },
        }
    }

    /// Number of dispatch calls made on this handle.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Abandon (or dispose of) the computation, freeing its checkpoint.
    pub fn release(self) {}
}

/// Entry dispatcher holding the scheduling tunables.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// A scheduler with the default tunables (1 ms quantum).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Start a computation of the distance between `s1` and `s2`.
    ///
    /// If either input is empty the handle is already finished and no matrix
    /// is allocated. Small inputs get their boundaries written here, inline.
    ///
    /// Precondition: the `(len(s1)+1) * (len(s2)+1)` matrix of `u32` must fit
    /// in memory; rejecting oversized pairs is the caller's job. This only
    /// fails, with [`InvalidInput`](crate::LevenshteinError::InvalidInput),
    /// when a length or the cell count cannot be represented at all.
    pub fn begin(&self, s1: &[u8], s2: &[u8]) -> Result<Handle> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("levenshtein_begin", m = s1.len(), n = s2.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        check_len("s1", s1)?;
        check_len("s2", s2)?;
        if s1.is_empty() || s2.is_empty() {
            // Both lengths were checked to be below u32::MAX.
            return Ok(Handle::done(s1.len().max(s2.len()) as u32));
        }

        let mut cp = Checkpoint::new(s1, s2)?;
        if self.config.inline_init(s1.len(), s2.len()) {
            init::initialize_inline(&mut cp);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            inline_init = cp.matrix_initialized(),
            "allocated checkpoint"
        );
        Ok(Handle::running(cp))
    }

    /// Run one quantum of work on `handle`.
    ///
    /// Every call that returns [`Step::Continue`] has moved the computation
    /// forward: a cursor advanced or a phase finished. Stepping a finished
    /// handle returns the same [`Step::Done`] again.
    pub fn step(&self, handle: &mut Handle) -> Step {
        handle.steps += 1;
        let cp = match &mut handle.state {
            HandleState::Done { distance, .. } => return Step::Done(*distance),
            HandleState::Running(cp) => cp,
        };

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("levenshtein_step", step = handle.steps);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let quantum = Quantum::start(self.config.quantum);

        if !cp.matrix_initialized {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("initialize", from = ?cp.initializer);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let outcome = init::initialize(cp, &quantum, self.config.init_check_interval);
            if outcome == PhaseOutcome::Suspended {
                #[cfg(feature = "tracing")]
                tracing::trace!(cursor = ?cp.initializer, "initialization suspended");
                return Step::Continue;
            }
            // The boundary walk may have used up the quantum without the
            // throttle noticing; check once before starting the fill.
            if quantum.is_exhausted() {
                #[cfg(feature = "tracing")]
                tracing::trace!("quantum spent at phase boundary");
                return Step::Continue;
            }
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill", from = ?cp.fill);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match fill::fill(cp, &quantum, self.config.fill_check_interval) {
            PhaseOutcome::Suspended => {
                #[cfg(feature = "tracing")]
                tracing::trace!(cursor = ?cp.fill, "fill suspended");
                Step::Continue
            }
            PhaseOutcome::Complete => {
                let distance = cp.corner();
                let cells = cp.progress().cells_total;
                #[cfg(feature = "tracing")]
                tracing::debug!(distance, steps = handle.steps, "computation finished");
                handle.state = HandleState::Done { distance, cells };
                Step::Done(distance)
            }
        }
    }

    /// Compute the distance, stepping until done.
    ///
    /// The calling thread is handed back between quanta only in the sense
    /// that this loop could yield there; use [`begin`](Self::begin) and
    /// [`step`](Self::step) directly, or
    /// [`compute_async`](Self::compute_async), to actually interleave work.
    pub fn compute(&self, s1: &[u8], s2: &[u8]) -> Result<u32> {
        let mut handle = self.begin(s1, s2)?;
        loop {
            if let Step::Done(distance) = self.step(&mut handle) {
                return Ok(distance);
            }
        }
    }
}

/// Levenshtein distance between `s1` and `s2` with the default tunables.
pub fn distance(s1: &[u8], s2: &[u8]) -> Result<u32> {
    Scheduler::new().compute(s1, s2)
}
