//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a rejected user intent: the operation that returned it
/// left all state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Answer for '{got}' does not match the current question '{expected}'")]
    StepMismatch { expected: String, got: String },

    #[error("Question '{0}' is already answered")]
    AlreadyAnswered(String),

    #[error("'{value}' is not an option of question '{question_id}'")]
    UnknownOption { question_id: String, value: String },

    #[error("Answer for '{0}' cannot be empty")]
    EmptyAnswer(String),

    #[error("Date {0} is in the past")]
    PastDate(chrono::NaiveDate),

    #[error("Current question '{0}' does not take a date")]
    NotADateQuestion(String),

    #[error("Nothing to retract at the first question")]
    NothingToRetract,

    #[error("Survey is incomplete: '{0}' has no answer")]
    Incomplete(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

impl DomainError {
    /// Check if this error is a silently ignorable validation rejection
    pub fn is_validation_rejected(&self) -> bool {
        !matches!(self, DomainError::Incomplete(_))
    }
}
