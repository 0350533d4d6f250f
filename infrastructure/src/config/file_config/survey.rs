//! Survey configuration from TOML (`[survey]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tripmate_application::{DEFAULT_LOCATION, SurveyParams};
use tripmate_domain::DEFAULT_TARGET_COUNT;

/// Raw survey configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSurveyConfig {
    /// Pause before the next question is shown, in milliseconds
    pub pacing_ms: u64,
    /// Location used when none has been set
    pub default_location: String,
    /// Places per recommendation
    pub target_count: usize,
}

impl Default for FileSurveyConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 500,
            default_location: DEFAULT_LOCATION.to_string(),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl FileSurveyConfig {
    pub fn to_survey_params(&self) -> SurveyParams {
        SurveyParams::default()
            .with_pacing(Duration::from_millis(self.pacing_ms))
            .with_default_location(self.default_location.clone())
            .with_target_count(self.target_count)
    }
}
