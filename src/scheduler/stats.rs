/*!
 * Scheduler Statistics
 * Track and report dispatch counters
 */

use super::Mlfq;
use crate::core::types::Work;
use serde::{Deserialize, Serialize};

/// Snapshot of scheduler counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Successful external admissions (demotions are not counted)
    pub admitted: usize,
    pub rejected: usize,
    pub dispatches: usize,
    pub demotions: usize,
    pub retirements: usize,
    /// Sum of full quanta applied, overshoot included
    pub work_consumed: Work,
    /// Jobs waiting at snapshot time
    pub queued: usize,
}

impl SchedulerStats {
    /// Jobs admitted but not yet retired
    pub fn outstanding(&self) -> usize {
        self.admitted.saturating_sub(self.retirements)
    }
}

impl Mlfq {
    /// Get scheduler statistics
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            queued: self.len(),
            ..self.stats
        }
    }
}
