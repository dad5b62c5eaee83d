/*!
 * Core Types
 * Common types used across the scheduler
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level index (0 is the highest priority)
pub type Level = usize;

/// Abstract work units
///
/// Signed so that a dispatch overshooting the remaining work can be reported as-is.
pub type Work = i64;

/// Job label (inline for short names)
pub type Label = smartstring::alias::String;

/// Job identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl JobId {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common result type for scheduler admission
pub type AdmitResult<T> = Result<T, super::errors::Rejected>;
