// SPDX-License-Identifier: MPL-2.0
//! Event collection over a bounded channel.
//!
//! Components hold a cheap [`DiagnosticsHandle`] and fire events without
//! blocking; the collector drains the channel into a ring buffer from the
//! application's tick. A full channel drops events rather than stalling the
//! UI thread.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Capacity of the handle-to-collector channel.
const CHANNEL_CAPACITY: usize = 256;

/// Sending side. Clone freely; all clones feed the same collector.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_warning(&self, warning: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { warning });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking: drop the event if the channel is full.
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receiving side: drains events into a bounded buffer and exports them.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector and its sending handle.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        (
            Self {
                event_rx,
                buffer: CircularBuffer::new(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all pending events from the channel into the buffer. Returns
    /// how many were drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Serializes the buffered events as a JSON array, oldest first.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }

    /// Empties the buffer. Called after a successful export so the next
    /// export starts from the events that follow it.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Convenience for logging an error event from the collector side.
    pub fn record_error(&mut self, error: ErrorEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Error { error }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::events::WarningType;

    #[test]
    fn handle_events_arrive_after_drain() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());

        handle.log_warning(WarningEvent::new(WarningType::ResourceLoad, "missing.jpg"));
        handle.log_action(UserAction::ButtonPress {
            label: "Request a quote".into(),
        });

        assert_eq!(collector.event_count(), 0);
        assert_eq!(collector.drain(), 2);
        assert_eq!(collector.event_count(), 2);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());

        for i in 0..CHANNEL_CAPACITY + 50 {
            handle.log_action(UserAction::ButtonPress {
                label: format!("b{i}"),
            });
        }

        // Only the channel capacity survives; nothing blocked.
        assert_eq!(collector.drain(), CHANNEL_CAPACITY);
    }

    #[test]
    fn export_produces_a_json_array() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_warning(WarningEvent::new(WarningType::Config, "bad settings.toml"));
        collector.drain();

        let json = collector.export_json().expect("export");
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("bad settings.toml"));
    }

    #[test]
    fn clearing_after_an_export_starts_the_next_one_fresh() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        handle.log_warning(WarningEvent::new(WarningType::ResourceLoad, "first.jpg"));
        collector.drain();

        collector.export_json().expect("export");
        collector.clear();
        assert_eq!(collector.event_count(), 0);

        handle.log_warning(WarningEvent::new(WarningType::ResourceLoad, "second.jpg"));
        collector.drain();
        let json = collector.export_json().expect("export");
        assert!(json.contains("second.jpg"));
        assert!(!json.contains("first.jpg"));
    }

    #[test]
    fn handles_can_outlive_each_other() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let clone = handle.clone();
        drop(handle);

        clone.log_action(UserAction::FormSubmit { valid: true });
        assert_eq!(collector.drain(), 1);
    }
}
