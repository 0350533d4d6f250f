//! Place recommendation domain
//!
//! [`RecommendationMatcher`] is the local, deterministic matcher used when
//! the remote recommendation service is unavailable.

pub mod matcher;
pub mod result;

pub use matcher::{DEFAULT_TARGET_COUNT, LOW_BUDGET_THRESHOLD, RecommendationMatcher, THRILL_TAG};
pub use result::{LOCAL_MATCH_MESSAGE, RecommendationRequest, RecommendationResult};
