/*!
 * Scheduler Core Operations
 * Admission, selection, dispatch and the run loop
 */

use super::job::Job;
use super::stats::SchedulerStats;
use super::Mlfq;
use crate::core::errors::{Rejected, SchedulerError};
use crate::core::types::{AdmitResult, JobId, Label, Level, Work};
use crate::monitoring::{Event, EventSink};
use log::{debug, info, trace, warn};

/// Result of dispatching one job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Work remains; the job was re-queued at `to`
    Demoted { from: Level, to: Level },
    /// Work exhausted; the job was dropped
    Retired,
}

impl Mlfq {
    /// Build a job with the next id from this scheduler's allocator
    pub fn create_job(&self, label: impl Into<Label>, work: Work) -> Job {
        Job::new(self.ids.next(), label, work)
    }

    /// Queue `job` at the tail of `level`
    ///
    /// On an out-of-range level the job is handed back inside the error.
    pub fn admit(&mut self, mut job: Job, level: Level) -> AdmitResult<()> {
        if level >= self.levels() {
            self.stats.rejected += 1;
            warn!(
                "Job {} ({}) rejected: level {} out of range (levels: {})",
                job.id(),
                job.label(),
                level,
                self.levels()
            );
            let error = SchedulerError::InvalidPriorityLevel {
                level,
                levels: self.levels(),
            };
            return Err(Rejected::new(job, error));
        }

        debug!(
            "Job {} ({}) admitted at level {} (work: {})",
            job.id(),
            job.label(),
            level,
            job.remaining()
        );
        job.set_level(level);
        self.queues[level].enqueue(job);
        self.stats.admitted += 1;
        Ok(())
    }

    /// Create and admit a job in one call
    pub fn spawn(&mut self, label: impl Into<Label>, work: Work, level: Level) -> AdmitResult<JobId> {
        let job = self.create_job(label, work);
        let id = job.id();
        self.admit(job, level)?;
        Ok(id)
    }

    /// Remove the head of the highest-priority non-empty level
    ///
    /// Strict scan: lower levels wait for as long as a higher one has work.
    pub fn select_next(&mut self) -> Option<Job> {
        self.queues.iter_mut().find_map(|queue| queue.dequeue_head())
    }

    /// Run `job` for one quantum of its current level
    pub fn dispatch_one<S: EventSink>(&mut self, mut job: Job, sink: &mut S) -> Outcome {
        let level = job.level().min(self.config.lowest());
        let quantum = self.config.quanta()[level];
        let size_before = job.remaining();

        sink.emit(&Event::Running {
            id: job.id(),
            label: job.label_owned(),
            level,
            quantum,
            size_before,
            size_after: size_before.saturating_sub(quantum),
        });

        let remaining = job.consume(quantum);
        self.stats.dispatches += 1;
        self.stats.work_consumed = self.stats.work_consumed.saturating_add(quantum);
        trace!(
            "Job {} ran at level {} for {}: {} -> {}",
            job.id(),
            level,
            quantum,
            size_before,
            remaining
        );

        if remaining > 0 {
            let to = (level + 1).min(self.config.lowest());
            sink.emit(&Event::Demoted {
                id: job.id(),
                label: job.label_owned(),
                from_level: level,
                to_level: to,
            });
            self.stats.demotions += 1;

            // `to` is always a valid level, so this only re-queues
            job.set_level(to);
            self.queues[to].enqueue(job);
            Outcome::Demoted { from: level, to }
        } else {
            sink.emit(&Event::Retired {
                id: job.id(),
                label: job.label_owned(),
            });
            self.stats.retirements += 1;
            debug!("Job {} ({}) retired", job.id(), job.label());
            Outcome::Retired
        }
    }

    /// Select and dispatch a single job; `false` once every level is empty
    pub fn step<S: EventSink>(&mut self, sink: &mut S) -> bool {
        match self.select_next() {
            Some(job) => {
                self.dispatch_one(job, sink);
                true
            }
            None => false,
        }
    }

    /// Drain every level, highest priority first, until a full pass finds nothing
    pub fn run_loop<S: EventSink>(&mut self, sink: &mut S) -> SchedulerStats {
        info!(
            "Run loop starting: {} jobs across {} levels",
            self.len(),
            self.levels()
        );

        loop {
            let mut all_empty = true;
            for level in 0..self.levels() {
                while !self.queues[level].is_empty() {
                    all_empty = false;
                    let Some(job) = self.select_next() else {
                        break;
                    };
                    self.dispatch_one(job, sink);
                }
            }
            if all_empty {
                break;
            }
        }

        let stats = self.stats();
        info!(
            "Run loop complete: {} dispatches, {} demotions, {} retirements",
            stats.dispatches, stats.demotions, stats.retirements
        );
        stats
    }
}
