/*!
 * Level Queue
 * FIFO run queue for a single priority level
 */

use super::job::Job;
use crate::core::types::JobId;
use std::collections::VecDeque;

/// FIFO queue of jobs at one priority level
#[derive(Debug, Default)]
pub struct LevelQueue {
    jobs: VecDeque<Job>,
}

impl LevelQueue {
    pub fn new() -> Self {
        Self {
            jobs: VecDeque::new(),
        }
    }

    /// Append at the tail
    #[inline]
    pub fn enqueue(&mut self, job: Job) {
        self.jobs.push_back(job);
    }

    /// Remove the head, `None` when empty
    #[inline]
    pub fn dequeue_head(&mut self) -> Option<Job> {
        self.jobs.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn head(&self) -> Option<&Job> {
        self.jobs.front()
    }

    /// Jobs front to back
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn ids(&self) -> Vec<JobId> {
        self.jobs.iter().map(Job::id).collect()
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.iter().any(|job| job.id() == id)
    }
}
