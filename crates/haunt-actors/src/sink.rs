//! Event sinks.
//!
//! Actors report every state change as a [`SimEvent`]. Where the event
//! goes is up to the caller: the engine logs them through `tracing`, tests
//! record them for inspection, and benchmarks drop them.

use std::sync::{Mutex, PoisonError};

use haunt_types::SimEvent;

/// Destination for simulation events. Called from actor threads, possibly
/// while the reporting actor holds a room lock, so implementations must not
/// block on anything an actor might hold.
pub trait EventSink: Send + Sync {
    /// Receive one event.
    fn record(&self, event: SimEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: SimEvent) {}
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SimEvent>>,
}

impl RecordingSink {
    /// An empty recorder.
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<SimEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: SimEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
