use std::time::Duration;

use crate::config::SchedulerConfig;
use crate::Scheduler;

pub struct SchedulerBuilder {
    config: SchedulerConfig,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }
    pub fn with_quantum(mut self, quantum: Duration) -> Self {
        self.config.quantum = quantum;
        self
    }
    pub fn with_init_check_interval(mut self, ops: u64) -> Self {
        self.config.init_check_interval = ops;
        self
    }
    pub fn with_fill_check_interval(mut self, ops: u64) -> Self {
        self.config.fill_check_interval = ops;
        self
    }
    pub fn with_inline_init_cutoff(mut self, combined_len: usize) -> Self {
        self.config.inline_init_cutoff = combined_len;
        self
    }
    pub fn build(self) -> Scheduler {
        Scheduler::with_config(self.config)
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
