//! Assorted utilities and helpers.

/// Number of cells in the `(m+1) x (n+1)` distance matrix, or `None` when
/// that count is not addressable on this target.
#[inline]
pub fn matrix_cells(m: usize, n: usize) -> Option<usize> {
    m.checked_add(1)?.checked_mul(n.checked_add(1)?)
}

/// Row-major offset of cell `(x, y)` in a matrix whose rows hold `row_len`
/// cells.
#[inline(always)]
pub fn cell_index(row_len: usize, x: usize, y: usize) -> usize {
    x * row_len + y
}
