//! Interactive survey
//!
//! Line-oriented front end to the questionnaire: each line is parsed into a
//! [`SurveyCommand`] and applied to the session.

pub mod input;
pub mod repl;

pub use input::{SurveyCommand, parse_input};
pub use repl::{Flow, SurveyRepl};
