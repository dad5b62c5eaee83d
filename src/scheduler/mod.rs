/*!
 * MLFQ Scheduler
 * Multi-level feedback queue with per-level quanta and saturating demotion
 */

use crate::core::errors::ConfigError;
use crate::core::id::JobIdAllocator;
use crate::core::types::{JobId, Level, Work};
use log::info;

mod config;
mod job;
mod operations;
mod queue;
mod stats;

pub use config::{MlfqConfig, DEFAULT_QUANTA, QUANTA_ENV};
pub use job::Job;
pub use operations::Outcome;
pub use queue::LevelQueue;
pub use stats::SchedulerStats;

/// Multi-level feedback queue scheduler
///
/// Level 0 is the highest priority. Every admitted job is owned by exactly
/// one level queue until it is dispatched; retired jobs are dropped.
#[derive(Debug)]
pub struct Mlfq {
    config: MlfqConfig,
    queues: Vec<LevelQueue>,
    ids: JobIdAllocator,
    stats: SchedulerStats,
}

impl Mlfq {
    /// Create scheduler from a validated configuration
    pub fn new(config: MlfqConfig) -> Self {
        info!(
            "MLFQ scheduler initialized: levels={}, quanta={:?}",
            config.levels(),
            config.quanta()
        );

        let queues = (0..config.levels()).map(|_| LevelQueue::new()).collect();
        Self {
            config,
            queues,
            ids: JobIdAllocator::new(),
            stats: SchedulerStats::default(),
        }
    }

    /// Create scheduler with one level per quantum
    pub fn try_from_quanta(quanta: Vec<Work>) -> Result<Self, ConfigError> {
        Ok(Self::new(MlfqConfig::new(quanta)?))
    }

    pub fn config(&self) -> &MlfqConfig {
        &self.config
    }

    /// Number of priority levels
    #[inline]
    pub fn levels(&self) -> usize {
        self.queues.len()
    }

    #[inline]
    pub fn quantum(&self, level: Level) -> Option<Work> {
        self.config.quantum(level)
    }

    pub fn queue(&self, level: Level) -> Option<&LevelQueue> {
        self.queues.get(level)
    }

    /// Jobs waiting at `level` (0 when out of range)
    pub fn queue_len(&self, level: Level) -> usize {
        self.queues.get(level).map_or(0, LevelQueue::len)
    }

    /// Ids waiting at `level`, front to back
    pub fn queued_ids(&self, level: Level) -> Vec<JobId> {
        self.queues.get(level).map(LevelQueue::ids).unwrap_or_default()
    }

    /// Level currently holding `id`
    pub fn level_of(&self, id: JobId) -> Option<Level> {
        self.queues.iter().position(|q| q.contains(id))
    }

    /// Total queued jobs across all levels
    pub fn len(&self) -> usize {
        self.queues.iter().map(LevelQueue::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(LevelQueue::is_empty)
    }
}

impl Default for Mlfq {
    fn default() -> Self {
        Self::new(MlfqConfig::default())
    }
}
