/*!
 * Scheduler Configuration
 * Level count and per-level quantum table
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Level, Work};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Quanta used when nothing else is configured
pub const DEFAULT_QUANTA: [Work; 3] = [10, 20, 40];

/// Environment variable holding comma-separated quanta
pub const QUANTA_ENV: &str = "MLFQ_QUANTA";

/// Validated scheduler configuration
///
/// Always holds at least one level and one positive quantum per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MlfqConfig {
    levels: usize,
    quanta: Vec<Work>,
}

impl MlfqConfig {
    /// One level per quantum
    pub fn new(quanta: Vec<Work>) -> Result<Self, ConfigError> {
        Self::with_levels(quanta.len(), quanta)
    }

    /// Explicit level count, checked against the quanta
    pub fn with_levels(levels: usize, quanta: Vec<Work>) -> Result<Self, ConfigError> {
        Self::validate(levels, &quanta)?;
        Ok(Self { levels, quanta })
    }

    fn validate(levels: usize, quanta: &[Work]) -> Result<(), ConfigError> {
        if levels == 0 {
            return Err(ConfigError::NoLevels);
        }
        if quanta.len() != levels {
            return Err(ConfigError::LevelCountMismatch {
                levels,
                quanta: quanta.len(),
            });
        }
        if let Some((level, &quantum)) = quanta.iter().enumerate().find(|&(_, &q)| q <= 0) {
            return Err(ConfigError::NonPositiveQuantum { level, quantum });
        }
        Ok(())
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    #[inline]
    pub fn quanta(&self) -> &[Work] {
        &self.quanta
    }

    #[inline]
    pub fn quantum(&self, level: Level) -> Option<Work> {
        self.quanta.get(level).copied()
    }

    /// Lowest priority level
    #[inline]
    pub fn lowest(&self) -> Level {
        self.levels - 1
    }

    /// Parse `"10, 20, 40"`
    pub fn parse_quanta(s: &str) -> Result<Self, ConfigError> {
        if s.trim().is_empty() {
            return Err(ConfigError::NoLevels);
        }
        let quanta = s
            .split(',')
            .map(str::trim)
            .map(|part| {
                if part.is_empty() {
                    return Err(ConfigError::Parse(format!("empty quantum in '{}'", s)));
                }
                part.parse::<Work>()
                    .map_err(|e| ConfigError::Parse(format!("invalid quantum '{}': {}", part, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(quanta)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&contents)
    }

    /// Read quanta from `MLFQ_QUANTA`, falling back to the default
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(QUANTA_ENV) {
            Ok(value) => Self::parse_quanta(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Parse(format!("{}: {}", QUANTA_ENV, e))),
        }
    }
}

impl Default for MlfqConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_QUANTA.len(),
            quanta: DEFAULT_QUANTA.to_vec(),
        }
    }
}

impl<'de> Deserialize<'de> for MlfqConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Inner {
            #[serde(default)]
            levels: Option<usize>,
            quanta: Vec<Work>,
        }

        let inner = Inner::deserialize(deserializer)?;
        let levels = inner.levels.unwrap_or(inner.quanta.len());
        Self::with_levels(levels, inner.quanta).map_err(serde::de::Error::custom)
    }
}
