/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{JobId, Level, Work};
use crate::scheduler::Job;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid priority level {level}: scheduler has {levels} levels")]
    #[diagnostic(
        code(scheduler::invalid_priority_level),
        help("Levels are numbered from 0 (highest priority) to one less than the level count.")
    )]
    InvalidPriorityLevel { level: Level, levels: usize },
}

/// Admission failure
///
/// Hands the job back so the caller keeps ownership of it.
#[derive(Error, Debug)]
#[error("job {} rejected: {}", .job.id(), .error)]
pub struct Rejected {
    pub job: Job,
    #[source]
    pub error: SchedulerError,
}

impl Rejected {
    pub fn new(job: Job, error: SchedulerError) -> Self {
        Self { job, error }
    }

    pub fn id(&self) -> JobId {
        self.job.id()
    }

    /// Recover the rejected job
    pub fn into_job(self) -> Job {
        self.job
    }
}

/// Configuration and workload loading errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Scheduler needs at least one priority level")]
    #[diagnostic(
        code(config::no_levels),
        help("Provide one quantum per level, e.g. [10, 20, 40].")
    )]
    NoLevels,

    #[error("Level count {levels} does not match {quanta} configured quanta")]
    #[diagnostic(
        code(config::level_count_mismatch),
        help("Every level needs exactly one quantum.")
    )]
    LevelCountMismatch { levels: usize, quanta: usize },

    #[error("Quantum {quantum} for level {level} must be positive")]
    #[diagnostic(
        code(config::non_positive_quantum),
        help("A zero or negative quantum would never consume work.")
    )]
    NonPositiveQuantum { level: Level, quantum: Work },

    #[error("Failed to parse configuration: {0}")]
    #[diagnostic(code(config::parse))]
    Parse(String),

    #[error("Failed to read {path}: {message}")]
    #[diagnostic(code(config::io), help("Check that the file exists and is readable."))]
    Io { path: String, message: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
