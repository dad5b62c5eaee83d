/*!
 * Workload Seeding
 * Initial job lists for a simulation run
 */

use crate::core::errors::{ConfigError, Rejected};
use crate::core::types::{Label, Level, Work};
use crate::scheduler::Mlfq;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON workload file
pub const WORKLOAD_ENV: &str = "MLFQ_WORKLOAD";

/// One job to admit before the run loop starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub label: Label,
    pub work: Work,
    #[serde(default)]
    pub level: Level,
}

impl Seed {
    pub fn new(label: impl Into<Label>, work: Work, level: Level) -> Self {
        Self {
            label: label.into(),
            work,
            level,
        }
    }
}

/// Nine jobs spread over three levels
pub fn demo_workload() -> Vec<Seed> {
    vec![
        Seed::new("A", 10, 0),
        Seed::new("B", 30, 0),
        Seed::new("C", 50, 0),
        Seed::new("D", 5, 1),
        Seed::new("E", 40, 1),
        Seed::new("F", 30, 1),
        Seed::new("G", 20, 2),
        Seed::new("H", 10, 2),
        Seed::new("I", 40, 2),
    ]
}

/// Parse a JSON array of seeds
pub fn parse_workload(json: &str) -> Result<Vec<Seed>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON workload file
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<Seed>, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_workload(&contents)
}

impl Mlfq {
    /// Admit seeds in order, returning the ones that were rejected
    pub fn seed<I>(&mut self, seeds: I) -> Vec<Rejected>
    where
        I: IntoIterator<Item = Seed>,
    {
        let mut rejected = Vec::new();
        let mut admitted = 0usize;
        for seed in seeds {
            let job = self.create_job(seed.label, seed.work);
            match self.admit(job, seed.level) {
                Ok(()) => admitted += 1,
                Err(e) => rejected.push(e),
            }
        }
        info!(
            "Workload seeded: {} admitted, {} rejected",
            admitted,
            rejected.len()
        );
        rejected
    }
}
