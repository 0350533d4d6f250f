//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod bookmarks;
pub mod feedback;
pub mod load_recommendations;
pub mod place_details;
pub mod submit_survey;
pub mod survey_session;

#[cfg(test)]
pub(crate) mod test_support;
