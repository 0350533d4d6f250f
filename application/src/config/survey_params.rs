//! Survey parameters for use case behavior control
//!
//! [`SurveyParams`] groups the static parameters that control how a finished
//! survey is submitted and how the conversation is paced.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tripmate_domain::DEFAULT_TARGET_COUNT;

/// Location used when none is stored
pub const DEFAULT_LOCATION: &str = "서울";

/// Survey behavior parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyParams {
    /// Pause before the next question is shown. Cosmetic only.
    pub pacing: Duration,
    /// Location sent when the store has no `userLocation`.
    pub default_location: String,
    /// Number of places in a recommendation.
    pub target_count: usize,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(500),
            default_location: DEFAULT_LOCATION.to_string(),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl SurveyParams {
    // ==================== Builder Methods ====================

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = count;
        self
    }
}
