//! Interior fill.
//!
//! Computes cells `(1..=m, 1..=n)` row by row:
//!
//! ```text
//! cell(x, y) = min(cell(x-1, y)   + 1,     deletion
//!                  cell(x,   y-1) + 1,     insertion
//!                  cell(x-1, y-1) + cost)  substitution, cost 0 on a match
//! ```
//!
//! Row-major order satisfies every dependency, and makes the write order a
//! total order independent of where the quanta fall, so the result does not
//! depend on how the work was sliced.

use super::PhaseOutcome;
use crate::checkpoint::Checkpoint;
use crate::clock::{OpThrottle, Quantum};
use crate::phases::init::initialize_inline;

/// Continue filling from the checkpoint's fill cursor, sampling the clock
/// every `interval` cells.
///
/// Any boundary cells still missing are written first, inline.
pub fn fill(cp: &mut Checkpoint, quantum: &Quantum, interval: u64) -> PhaseOutcome {
    let mut throttle = OpThrottle::new(interval);
    fill_with(cp, || throttle.tick(quantum))
}

/// Fill every remaining cell without looking at the clock.
pub fn fill_to_end(cp: &mut Checkpoint) {
    let outcome = fill_with(cp, || false);
    debug_assert_eq!(outcome, PhaseOutcome::Complete);
}

fn fill_with(cp: &mut Checkpoint, mut suspend: impl FnMut() -> bool) -> PhaseOutcome {
    if !cp.matrix_initialized {
        initialize_inline(cp);
    }
    let (m, n) = cp.dimensions();
    let row_len = cp.row_len();
    let Checkpoint {
        s1,
        s2,
        matrix,
        fill: cursor,
        ..
    } = cp;
    let (mut x, mut y) = *cursor;

    while x <= m {
        let a = s1[x - 1];
        let row = x * row_len;
        let above = row - row_len;
        while y <= n {
            let cost = u32::from(a != s2[y - 1]);
            let deletion = matrix[above + y] + 1;
            let insertion = matrix[row + y - 1] + 1;
            let substitution = matrix[above + y - 1] + cost;
            matrix[row + y] = deletion.min(insertion).min(substitution);

            y += 1;
            let last = x == m && y > n;
            if !last && suspend() {
                *cursor = if y > n { (x + 1, 1) } else { (x, y) };
                return PhaseOutcome::Suspended;
            }
        }
        x += 1;
        y = 1;
    }

    *cursor = (x, 1);
    PhaseOutcome::Complete
}
