// SPDX-License-Identifier: MPL-2.0
//! Outbound event notifications (selection changes, activations).
//!
//! The engine reports what happened; what a host does with it (scripting,
//! logging, automation) is its own business.

/// Receives descriptive events from the carousel.
pub trait EventSink {
    /// `event` is a stable event name (e.g. `collection-select`), `subject`
    /// the affected collection's name, `detail` a free-form qualifier.
    fn fire_event(&mut self, event: &str, subject: &str, detail: &str);
}

/// Logs events through `tracing`, the default host sink.
#[derive(Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn fire_event(&mut self, event: &str, subject: &str, detail: &str) {
        tracing::info!(event, subject, detail, "carousel event");
    }
}

/// Collects events for assertions.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    pub events: Vec<(String, String, String)>,
}

impl EventSink for RecordingEventSink {
    fn fire_event(&mut self, event: &str, subject: &str, detail: &str) {
        self.events
            .push((event.to_string(), subject.to_string(), detail.to_string()));
    }
}
