// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events fall into three families: user actions (the analytics hooks),
//! warnings (operator-facing, never shown to the user), and errors. Each
//! carries a wall-clock timestamp so exported reports can be correlated
//! with user reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions worth recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A call-to-action or form button was pressed.
    ButtonPress { label: String },
    /// A navigation link jumped to a section.
    NavJump { section: String },
    /// The portfolio filter changed.
    FilterChange { filter: String },
    /// The contact form was submitted (valid or not).
    FormSubmit { valid: bool },
}

/// Classification for warning events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A resource (image, asset) failed to load.
    ResourceLoad,
    /// The configuration file was present but unusable.
    Config,
    Other,
}

/// Classification for error events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Io,
    Other,
}

/// A warning: degraded behavior the user never sees directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// What happened, without the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { warning: WarningEvent },
    Error { error: ErrorEvent },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            warning: WarningEvent::new(WarningType::ResourceLoad, "missing thumbnail"),
        });

        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"kind\":\"warning\""));
        assert!(json.contains("resource_load"));
    }

    #[test]
    fn user_action_round_trips() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::FilterChange {
                filter: "interior".into(),
            },
        });

        let json = serde_json::to_string(&event).expect("serialize");
        let back: DiagnosticEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, event.kind);
    }
}
