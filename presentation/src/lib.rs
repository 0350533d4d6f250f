//! Presentation layer for tripmate
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive survey.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod survey;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::json::JsonFormatter;
pub use output::{OutputFormatter, formatter_for};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use survey::{SurveyCommand, SurveyRepl};
