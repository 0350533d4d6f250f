//! Logging infrastructure: structured survey event logging
//!
//! Provides [`JsonlSurveyLogger`], a JSONL file writer that implements
//! the [`SurveyLogger`](tripmate_application::SurveyLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlSurveyLogger;
