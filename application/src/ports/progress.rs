//! Submission progress port
//!
//! Defines the interface for reporting progress while a finished survey is
//! turned into recommendations.

use tripmate_domain::RecommendationResult;

/// Where a recommendation result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// The remote recommendation service answered
    Remote,
    /// The bundled catalog was matched locally
    LocalFallback,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Remote => "remote",
            ResultSource::LocalFallback => "local_fallback",
        }
    }
}

/// Callback for progress updates during survey submission
///
/// Implementations live in the presentation layer.
pub trait SubmissionProgress: Send + Sync {
    /// Called before the remote request is sent
    fn on_request_start(&self, location: &str);

    /// Called when the remote request failed and local matching takes over
    fn on_fallback(&self, _reason: &str) {}

    /// Called once the result is known
    fn on_complete(&self, result: &RecommendationResult, source: ResultSource);
}

/// No-op progress for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_request_start(&self, _location: &str) {}
    fn on_complete(&self, _result: &RecommendationResult, _source: ResultSource) {}
}
