/*!
 * Event System
 * Structured dispatch events emitted by the scheduler
 */

use crate::core::types::{JobId, Label, Level, Work};
use serde::{Deserialize, Serialize};

/// Event kind for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Running,
    Demoted,
    Retired,
}

/// One scheduler state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Job dispatched at `level`; `size_after` may be negative
    Running {
        id: JobId,
        label: Label,
        level: Level,
        quantum: Work,
        size_before: Work,
        size_after: Work,
    },
    /// Unfinished job moved down a level (or kept at the lowest one)
    Demoted {
        id: JobId,
        label: Label,
        from_level: Level,
        to_level: Level,
    },
    /// Job finished and was discarded
    Retired { id: JobId, label: Label },
}

impl Event {
    pub fn id(&self) -> JobId {
        match self {
            Self::Running { id, .. } | Self::Demoted { id, .. } | Self::Retired { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Running { label, .. }
            | Self::Demoted { label, .. }
            | Self::Retired { label, .. } => label,
        }
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Self::Running { .. } => Kind::Running,
            Self::Demoted { .. } => Kind::Demoted,
            Self::Retired { .. } => Kind::Retired,
        }
    }
}
