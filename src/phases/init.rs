//! Boundary initialization.
//!
//! Cell `(0, y) = y` and cell `(x, 0) = x`: the cost of building a prefix
//! from nothing, or reducing one to nothing. The walk covers the top row
//! `(0, 0..=n)` and then the left column `(1..=m, 0)`, visiting every
//! boundary cell exactly once. For very unbalanced inputs (one long string
//! against a short one) this is most of the work, so it yields like the
//! fill phase does.

use super::PhaseOutcome;
use crate::checkpoint::Checkpoint;
use crate::clock::{OpThrottle, Quantum};
use crate::utils::cell_index;

/// Continue the boundary walk from the checkpoint's initializer cursor,
/// sampling the clock every `interval` cells.
pub fn initialize(cp: &mut Checkpoint, quantum: &Quantum, interval: u64) -> PhaseOutcome {
    let mut throttle = OpThrottle::new(interval);
    walk(cp, || throttle.tick(quantum))
}

/// Write the whole boundary without looking at the clock.
///
/// Used for small matrices, where sampling the clock would cost more than
/// the writes themselves.
pub fn initialize_inline(cp: &mut Checkpoint) {
    let outcome = walk(cp, || false);
    debug_assert_eq!(outcome, PhaseOutcome::Complete);
}

fn walk(cp: &mut Checkpoint, mut suspend: impl FnMut() -> bool) -> PhaseOutcome {
    if cp.matrix_initialized {
        return PhaseOutcome::Complete;
    }
    let (m, n) = cp.dimensions();
    let row_len = cp.row_len();
    let (mut x, mut y) = cp.initializer;

    if x == 0 {
        while y <= n {
            cp.matrix[cell_index(row_len, 0, y)] = y as u32;
            y += 1;
            let more = y <= n || m > 0;
            if more && suspend() {
                cp.initializer = (0, y);
                return PhaseOutcome::Suspended;
            }
        }
        x = 1;
    }

    while x <= m {
        cp.matrix[cell_index(row_len, x, 0)] = x as u32;
        x += 1;
        if x <= m && suspend() {
            cp.initializer = (x, 0);
            return PhaseOutcome::Suspended;
        }
    }

    cp.initializer = (x, 0);
    cp.matrix_initialized = true;
    PhaseOutcome::Complete
}
