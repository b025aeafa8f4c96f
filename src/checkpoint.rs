//! Resumable state of one distance computation.
//!
//! A [`Checkpoint`] owns both inputs and the `(m+1) x (n+1)` matrix, plus two
//! independent cursors: one for boundary initialization and one for the
//! interior fill. Together with the inputs it fully determines the work that
//! remains, so a phase can stop after any completed cell and a later call
//! picks up at exactly that cell.
//!
//! Cell `(x, y)` holds the distance between the first `x` bytes of `s1` and
//! the first `y` bytes of `s2`, stored at `x * (n + 1) + y`. Cells are
//! written once and never overwritten.

use crate::error::{LevenshteinError, Result};
use crate::utils::{cell_index, matrix_cells};

/// Cell position `(x, y)`: `x` indexes `s1` prefixes, `y` indexes `s2`.
pub type Cursor = (usize, usize);

#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub(crate) s1: Box<[u8]>,
    pub(crate) s2: Box<[u8]>,
    pub(crate) matrix: Vec<u32>,
    pub(crate) matrix_initialized: bool,
    /// Next unvisited boundary cell. `x == 0` while walking the top row,
    /// then `y == 0` while walking the left column.
    pub(crate) initializer: Cursor,
    /// Next interior cell to compute.
    pub(crate) fill: Cursor,
}

/// Cells written so far against the total the computation will write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub cells_done: usize,
    pub cells_total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.cells_total == 0 {
            1.0
        } else {
            self.cells_done as f64 / self.cells_total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cells_done == self.cells_total
    }
}

impl Checkpoint {
    /// Allocate a checkpoint sized for `s1` x `s2`.
    ///
    /// Fails with [`LevenshteinError::InvalidInput`] when an input length
    /// is not below `u32::MAX` or the cell count overflows `usize`.
    /// Whether the allocation fits in memory is the caller's concern.
    pub fn new(s1: &[u8], s2: &[u8]) -> Result<Self> {
        check_len("s1", s1)?;
        check_len("s2", s2)?;
        let cells = matrix_cells(s1.len(), s2.len()).ok_or_else(|| {
            LevenshteinError::invalid_input(format!(
                "{}x{} matrix is not addressable",
                s1.len() + 1,
                s2.len() + 1
            ))
        })?;

        Ok(Self {
            s1: s1.into(),
            s2: s2.into(),
            matrix: vec![0; cells],
            matrix_initialized: false,
            initializer: (0, 0),
            fill: (1, 1),
        })
    }

    pub fn s1(&self) -> &[u8] {
        &self.s1
    }

    pub fn s2(&self) -> &[u8] {
        &self.s2
    }

    /// `(m, n)`: the input lengths. The matrix is one larger on each axis.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.s1.len(), self.s2.len())
    }

    pub fn matrix_initialized(&self) -> bool {
        self.matrix_initialized
    }

    pub fn initializer_cursor(&self) -> Cursor {
        self.initializer
    }

    pub fn fill_cursor(&self) -> Cursor {
        self.fill
    }

    /// Whether every interior cell has been computed.
    pub fn is_filled(&self) -> bool {
        self.matrix_initialized && self.fill.0 > self.s1.len()
    }

    /// The distance, once the fill phase has completed.
    pub fn distance(&self) -> Option<u32> {
        self.is_filled().then(|| self.corner())
    }

    /// Cell `(m, n)`, whatever its current state.
    #[inline]
    pub(crate) fn corner(&self) -> u32 {
        let (m, n) = self.dimensions();
        self.matrix[cell_index(n + 1, m, n)]
    }

    /// Value of cell `(x, y)`, or `None` outside the matrix. Cells not yet
    /// written read as zero.
    pub fn cell(&self, x: usize, y: usize) -> Option<u32> {
        let (m, n) = self.dimensions();
        if x > m || y > n {
            return None;
        }
        Some(self.matrix[cell_index(n + 1, x, y)])
    }

    pub fn progress(&self) -> Progress {
        let (m, n) = self.dimensions();
        let boundary_total = m + n + 1;
        let boundary_done = if self.matrix_initialized {
            boundary_total
        } else if self.initializer.0 == 0 {
            self.initializer.1
        } else {
            n + self.initializer.0
        };
        let interior_done = if self.matrix_initialized {
            (self.fill.0 - 1) * n + (self.fill.1 - 1)
        } else {
            0
        };
        Progress {
            cells_done: boundary_done + interior_done,
            cells_total: boundary_total + m * n,
        }
    }

    #[inline(always)]
    pub(crate) fn row_len(&self) -> usize {
        self.s2.len() + 1
    }
}

pub(crate) fn check_len(name: &str, s: &[u8]) -> Result<()> {
    // Cells hold values up to the input length and the recurrence adds one
    // to them, so the length must stay strictly below u32::MAX.
    if s.len() >= u32::MAX as usize {
        return Err(LevenshteinError::invalid_input(format!(
            "{name} has {} bytes, too many for a u32 cell",
            s.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_checkpoint_has_zeroed_matrix_and_start_cursors() {
        let cp = Checkpoint::new(b"kitten", b"sitting").unwrap();
        assert_eq!(cp.dimensions(), (6, 7));
        assert_eq!(cp.matrix.len(), 7 * 8);
        assert!(cp.matrix.iter().all(|&c| c == 0));
        assert!(!cp.matrix_initialized());
        assert_eq!(cp.initializer_cursor(), (0, 0));
        assert_eq!(cp.fill_cursor(), (1, 1));
        assert_eq!(cp.distance(), None);
    }

    #[test]
    fn inputs_are_copied_verbatim() {
        let cp = Checkpoint::new(b"flaw", b"lawn").unwrap();
        assert_eq!(cp.s1(), b"flaw");
        assert_eq!(cp.s2(), b"lawn");
    }

    #[test]
    fn cell_outside_matrix_is_none() {
        let cp = Checkpoint::new(b"ab", b"c").unwrap();
        assert_eq!(cp.cell(2, 1), Some(0));
        assert_eq!(cp.cell(3, 0), None);
        assert_eq!(cp.cell(0, 2), None);
    }

    #[test]
    fn progress_of_fresh_checkpoint() {
        let cp = Checkpoint::new(b"abc", b"de").unwrap();
        let p = cp.progress();
        assert_eq!(p.cells_done, 0);
        assert_eq!(p.cells_total, 12);
        assert!(!p.is_complete());
        assert_eq!(p.fraction(), 0.0);
    }

    #[test]
    fn progress_tracks_both_boundary_walks() {
        let mut cp = Checkpoint::new(b"abc", b"de").unwrap();
        cp.initializer = (0, 2);
        assert_eq!(cp.progress().cells_done, 2);
        // Top row (3 cells) plus (1,0).
        cp.initializer = (2, 0);
        assert_eq!(cp.progress().cells_done, 4);
        cp.matrix_initialized = true;
        cp.fill = (2, 2);
        // 6 boundary cells, row 1 (2 cells), then (2,1).
        assert_eq!(cp.progress().cells_done, 9);
    }
}
