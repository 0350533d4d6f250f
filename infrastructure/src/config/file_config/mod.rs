//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod storage;
mod survey;

pub use api::{DEFAULT_BASE_URL, FileApiConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::{FileLoggingConfig, FileStorageConfig};
pub use survey::FileSurveyConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration values that parse but cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("survey.target_count cannot be 0")]
    InvalidTargetCount,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog service settings
    pub api: FileApiConfig,
    /// Survey pacing and recommendation size
    pub survey: FileSurveyConfig,
    /// Key-value store location
    pub storage: FileStorageConfig,
    /// Survey event log
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Reject values no adapter can work with
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.api.enabled && self.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.survey.target_count == 0 {
            return Err(ConfigValidationError::InvalidTargetCount);
        }
        Ok(())
    }
}
