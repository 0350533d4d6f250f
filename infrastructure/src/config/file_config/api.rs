//! Catalog service configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Base URL of the development catalog service
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Raw catalog service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// When false every request fails fast and local data is used
    pub enabled: bool,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
            enabled: true,
        }
    }
}
