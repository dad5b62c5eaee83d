/*!
 * Core Module
 * Shared types, id allocation and error handling
 */

pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, Rejected, SchedulerError};
pub use id::JobIdAllocator;
pub use types::{AdmitResult, JobId, Label, Level, Work};
