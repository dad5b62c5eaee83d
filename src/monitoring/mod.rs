/*!
 * Monitoring Module
 * Scheduler events, sinks and tracing setup
 */

pub mod console;
pub mod events;
pub mod sink;
pub mod tracer;

pub use console::{ConsoleSink, Format};
pub use events::{Event, Kind};
pub use sink::{ChannelSink, EventLog, EventSink, NullSink, TracingSink};
pub use tracer::{init_tracing, run_span};
