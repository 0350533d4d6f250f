//! Port for structured survey event logging.
//!
//! Defines the [`SurveyLogger`] trait for recording survey events
//! (question asked, answer given, retraction, submission, fallback) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! survey session in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured survey event for logging.
pub struct SurveyEvent {
    /// Event type identifier (e.g., "answer", "retract", "submission").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SurveyEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging survey events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait SurveyLogger: Send + Sync {
    /// Record a survey event.
    fn log(&self, event: SurveyEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSurveyLogger;

impl SurveyLogger for NoSurveyLogger {
    fn log(&self, _event: SurveyEvent) {}
}
