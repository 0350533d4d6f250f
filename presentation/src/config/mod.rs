//! Presentation-level configuration
//!
//! Configuration for output formatting and survey REPL behavior.

use std::path::PathBuf;
use std::time::Duration;
use tripmate_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Survey REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show the submission spinner
    pub show_progress: bool,
    /// Pause before the next question appears
    pub pacing: Duration,
    /// Path to line editor history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            pacing: Duration::from_millis(500),
            history_file: None,
        }
    }
}
