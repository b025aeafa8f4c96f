//! The two resumable phases of a distance computation.
//!
//! - [`init`] : writes the zeroth row and column (distances to the empty prefix).
//! - [`fill`] : computes interior cells row-major from the recurrence.
//!
//! Both phases take a [`Quantum`](crate::clock::Quantum) and a check interval,
//! run until done or until the quantum is spent, and leave their cursor on the
//! next unvisited cell of the [`Checkpoint`](crate::checkpoint::Checkpoint).

pub mod fill;
pub mod init;

/// How a phase call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase has no work left.
    Complete,
    /// The quantum ran out; the cursor marks where to resume.
    Suspended,
}
