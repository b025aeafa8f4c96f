//! Batches of independent computations on the rayon pool.
//!
//! Each pair still runs single-threaded through [`Scheduler::compute`]; the
//! pool only spreads whole computations across workers.

use rayon::prelude::*;

use crate::error::Result;
use crate::scheduler::Scheduler;

impl Scheduler {
    /// Distances for every pair, in input order. Fails on the first pair
    /// rejected by [`begin`](Scheduler::begin).
    pub fn compute_batch(&self, pairs: &[(&[u8], &[u8])]) -> Result<Vec<u32>> {
        pairs
            .par_iter()
            .map(|(s1, s2)| self.compute(s1, s2))
            .collect()
    }
}
