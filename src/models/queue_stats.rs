use serde::{Deserialize, Serialize};

/// Job counters of one queue namespace, as shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueStats {
    pub namespace: String,
    pub pending: u64,
    pub scheduled: u64,
    pub done: u64,
    pub failed: u64,
    pub dead: u64,
}

impl QueueStats {
    pub fn total(&self) -> u64 {
        self.pending + self.scheduled + self.done + self.failed + self.dead
    }
}
