//! Chat transcript of a survey session

use super::question::{ChoiceOption, Question, QuestionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    System,
    User,
}

/// One entry of the survey transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub origin: Origin,
    /// Display text (question prompt, option label, or literal answer)
    pub text: String,
    pub question_id: String,
    pub kind: QuestionKind,
    /// Options offered with a single-choice system message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    /// Raw answer value carried by a user message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// System message asking `question`
    pub fn ask(question: &Question) -> Self {
        Self {
            origin: Origin::System,
            text: question.prompt().to_string(),
            question_id: question.id().to_string(),
            kind: question.kind(),
            options: question.options().map(<[ChoiceOption]>::to_vec),
            value: None,
            timestamp: Utc::now(),
        }
    }

    /// User message answering `question`
    pub fn reply(question: &Question, text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
            question_id: question.id().to_string(),
            kind: question.kind(),
            options: None,
            value: Some(value.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.origin == Origin::System
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Append-only message log; only retraction pops from the tail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<ChatMessage>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.0.push(message);
    }

    /// Pop the trailing message if it has the given origin
    pub fn pop_if(&mut self, origin: Origin) -> Option<ChatMessage> {
        if self.0.last().is_some_and(|m| m.origin == origin) {
            self.0.pop()
        } else {
            None
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
