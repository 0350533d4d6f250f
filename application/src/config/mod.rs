//! Application-level configuration.
//!
//! - [`SurveyParams`]: pacing, default location and result size

pub mod survey_params;

pub use survey_params::{DEFAULT_LOCATION, SurveyParams};
