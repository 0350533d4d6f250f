//! Conversational survey domain
//!
//! A [`Survey`] is an ordered list of [`Question`]s. The
//! [`QuestionnaireEngine`] walks it step by step, recording [`Answers`]
//! and a [`Transcript`] of the exchange.

pub mod answers;
pub mod engine;
pub mod question;
pub mod transcript;

pub use answers::Answers;
pub use engine::{DateProgress, QuestionnaireEngine, SubmitOutcome};
pub use question::{ChoiceOption, Question, QuestionKind, Survey};
pub use transcript::{ChatMessage, Origin, Transcript};
