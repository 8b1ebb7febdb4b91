// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: the operator-facing event channel.
//!
//! Degraded behavior (a portfolio thumbnail that failed to load, a malformed
//! config file) is logged here and never surfaced to the user; button and
//! form interactions are recorded as lightweight analytics events. Events
//! live in a memory-bounded ring buffer and can be exported as JSON.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
