//! Storage configuration from TOML (`[storage]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Store file; the platform data directory is used when unset
    pub path: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Configured path, or `<data_dir>/tripmate/store.json`
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("tripmate").join("store.json")))
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving survey events; disabled when unset
    pub conversation_log: Option<PathBuf>,
}
