//! Configuration file loading for tripmate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIPMATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tripmate.toml` or `./.tripmate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/tripmate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileStorageConfig, FileSurveyConfig,
};
pub use loader::ConfigLoader;
