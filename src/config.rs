//! Scheduling tunables.
//!
//! The defaults suit a host scheduler that expects native work to hand
//! control back roughly every millisecond. Hosts with coarser or finer
//! scheduling can adjust them through [`SchedulerBuilder`](crate::SchedulerBuilder).

use std::time::Duration;

/// Wall-clock budget of one dispatch call.
pub const DEFAULT_QUANTUM: Duration = Duration::from_millis(1);

/// Boundary cells written between clock samples.
pub const DEFAULT_INIT_CHECK_INTERVAL: u64 = 1_000;

/// Interior cells computed between clock samples.
pub const DEFAULT_FILL_CHECK_INTERVAL: u64 = 50_000;

/// Combined input length below which boundaries are written inline when the
/// computation begins, with no clock sampling at all.
pub const DEFAULT_INLINE_INIT_CUTOFF: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub quantum: Duration,
    pub init_check_interval: u64,
    pub fill_check_interval: u64,
    pub inline_init_cutoff: usize,
}

impl SchedulerConfig {
    /// Whether a pair of inputs with these lengths gets its boundaries
    /// written inline.
    #[inline]
    pub fn inline_init(&self, m: usize, n: usize) -> bool {
        m.saturating_add(n) < self.inline_init_cutoff
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            init_check_interval: DEFAULT_INIT_CHECK_INTERVAL,
            fill_check_interval: DEFAULT_FILL_CHECK_INTERVAL,
            inline_init_cutoff: DEFAULT_INLINE_INIT_CUTOFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_constants() {
        let c = SchedulerConfig::default();
        assert_eq!(c.quantum, Duration::from_millis(1));
        assert_eq!(c.init_check_interval, 1_000);
        assert_eq!(c.fill_check_interval, 50_000);
        assert_eq!(c.inline_init_cutoff, 1_000);
    }

    #[test]
    fn inline_cutoff_is_exclusive() {
        let c = SchedulerConfig::default();
        assert!(c.inline_init(499, 500));
        assert!(!c.inline_init(500, 500));
        assert!(!c.inline_init(usize::MAX, 1));
    }
}
