/*!
 * Job Record
 * The unit of schedulable work
 */

use crate::core::types::{JobId, Label, Level, Work};
use serde::Serialize;

/// Schedulable job
///
/// Not `Clone`: a job lives in exactly one place at a time, either a level
/// queue, the dispatcher, or the caller's hands after a rejected admission.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Job {
    id: JobId,
    label: Label,
    remaining: Work,
    level: Level,
}

impl Job {
    pub fn new(id: JobId, label: impl Into<Label>, work: Work) -> Self {
        Self {
            id,
            label: label.into(),
            remaining: work,
            level: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> JobId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub(crate) fn label_owned(&self) -> Label {
        self.label.clone()
    }

    /// Work left; zero or negative once retired
    #[inline]
    pub fn remaining(&self) -> Work {
        self.remaining
    }

    /// Level the job was last admitted at
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn is_retired(&self) -> bool {
        self.remaining <= 0
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Apply a full quantum and return the work left
    pub(crate) fn consume(&mut self, quantum: Work) -> Work {
        debug_assert!(quantum > 0, "quantum must be positive");
        self.remaining = self.remaining.saturating_sub(quantum);
        self.remaining
    }
}
