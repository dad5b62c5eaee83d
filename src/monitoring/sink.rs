/*!
 * Event Sinks
 * Consumers for scheduler events
 */

use super::events::{Event, Kind};
use crate::core::types::JobId;

/// Receives one event per scheduler state change
pub trait EventSink {
    fn emit(&mut self, event: &Event);
}

impl<F> EventSink for F
where
    F: FnMut(&Event),
{
    #[inline]
    fn emit(&mut self, event: &Event) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn emit(&mut self, _event: &Event) {}
}

/// Records events in emission order
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Events for a single job
    pub fn for_job(&self, id: JobId) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.id() == id)
    }

    /// Job ids in the order they were dispatched
    pub fn dispatch_order(&self) -> Vec<JobId> {
        self.events
            .iter()
            .filter(|e| e.kind() == Kind::Running)
            .map(Event::id)
            .collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Writes each event as a structured tracing record
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::Running {
                id,
                label,
                level,
                quantum,
                size_before,
                size_after,
            } => tracing::info!(
                job_id = id.get(),
                label = %label,
                level = *level,
                quantum,
                size_before,
                size_after,
                "job running"
            ),
            Event::Demoted {
                id,
                label,
                from_level,
                to_level,
            } => tracing::info!(
                job_id = id.get(),
                label = %label,
                from_level,
                to_level,
                "job demoted"
            ),
            Event::Retired { id, label } => {
                tracing::info!(job_id = id.get(), label = %label, "job retired")
            }
        }
    }
}

/// Forwards events over a channel
///
/// A disconnected receiver is ignored; the scheduler keeps running.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: flume::Sender<Event>,
}

impl ChannelSink {
    pub fn new(tx: flume::Sender<Event>) -> Self {
        Self { tx }
    }

    /// Unbounded channel with its receiving end
    pub fn unbounded() -> (Self, flume::Receiver<Event>) {
        let (tx, rx) = flume::unbounded();
        (Self::new(tx), rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: &Event) {
        let _ = self.tx.send(event.clone());
    }
}
