/*!
 * ID Generation
 * Per-scheduler job identifier allocation
 */

use super::types::JobId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Job identifier allocator
///
/// Hands out strictly increasing ids starting at 1 and never reuses one.
/// Backed by an atomic counter so `next` only needs a shared reference.
#[derive(Debug)]
pub struct JobIdAllocator {
    counter: AtomicU64,
}

impl JobIdAllocator {
    /// Create new allocator starting at 1
    #[inline]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    #[inline]
    pub(crate) fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }

    /// Allocate the next id
    #[inline]
    pub fn next(&self) -> JobId {
        JobId(self.counter.fetch_add(1, Ordering::SeqCst))
    }

    /// Id the next call to `next` will return
    #[inline]
    pub fn peek(&self) -> JobId {
        JobId(self.counter.load(Ordering::SeqCst))
    }
}

impl Default for JobIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
