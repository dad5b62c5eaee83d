/*!
 * MLFQ Simulator Library
 * Multi-level feedback queue scheduling engine with structured dispatch events
 */

pub mod core;
pub mod monitoring;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::{ConfigError, JobId, JobIdAllocator, Level, Rejected, SchedulerError, Work};
pub use monitoring::{init_tracing, ChannelSink, Event, EventLog, EventSink, Kind, NullSink, TracingSink};
pub use scheduler::{Job, LevelQueue, Mlfq, MlfqConfig, Outcome, SchedulerStats};
pub use workload::{demo_workload, load_workload, parse_workload, Seed};
