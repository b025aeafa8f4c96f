//! Yielding Levenshtein distance
//!
//! This crate computes the Levenshtein (edit) distance between two byte
//! strings with the classic `(m+1) x (n+1)` dynamic-programming matrix, but
//! never holds the calling thread for more than a short, bounded quantum
//! (1 ms by default). It is meant for hosts that run many tasks on a shared
//! cooperative thread, where one long matrix fill would starve everything
//! else.
//!
//! ## Core idea
//! 1. [`Scheduler::begin`] validates the inputs and allocates a
//!    [`Checkpoint`]: matrix, inputs, and cursors for each phase.
//! 2. Every [`Scheduler::step`] resumes from the checkpoint, writes boundary
//!    cells and then interior cells until the quantum is spent, and returns
//!    [`Step::Continue`] or [`Step::Done`].
//! 3. The host calls `step` again whenever it is ready to give the
//!    computation another quantum.
//!
//! Cells are written in a fixed row-major order, so the distance is the same
//! however many quanta the work is split across.
//!
//! ## Quick start
//! ```
//! use yielding_lev::distance;
//!
//! assert_eq!(distance(b"kitten", b"sitting").unwrap(), 3);
//! assert_eq!(distance(b"", b"abc").unwrap(), 3);
//! ```
//!
//! With an async executor, [`Scheduler::compute_async`] returns a
//! [`DistanceFuture`] that yields between quanta.
//!
//! ## Tunables
//! Quantum length, the number of cells between clock samples for each
//! phase, and the combined input length below which boundaries are written
//! inline are all set through [`SchedulerBuilder`].

pub mod builder;
pub mod checkpoint;
pub mod clock;
pub mod config;
pub mod error;
pub mod future;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod phases;
pub mod scheduler;
pub mod utils;

pub use crate::builder::SchedulerBuilder;
pub use crate::checkpoint::{Checkpoint, Cursor, Progress};
pub use crate::config::SchedulerConfig;
pub use crate::error::{LevenshteinError, Result};
pub use crate::future::DistanceFuture;
pub use crate::scheduler::{distance, Handle, Scheduler, Step};
