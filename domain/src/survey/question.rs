//! Survey question value objects
//!
//! A [`Question`] is a tagged union: each kind carries only the fields
//! it needs, so renderers dispatch on the variant instead of probing
//! optional fields.

use serde::{Deserialize, Serialize};

/// Question id of the preferred travel style (`adventure`, `culture`, ...)
pub const TRAVEL_TYPE: &str = "travelType";
/// Question id of the budget tier (`low`, `medium`, `high`)
pub const BUDGET: &str = "budget";
/// Question id of the trip length (`day` or `weekend`)
pub const DURATION: &str = "duration";
/// Question id of the travel date or date range
pub const TRAVEL_DATE: &str = "travelDate";
/// Question id of the travel companion
pub const COMPANION: &str = "companion";

/// One selectable option of a single-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Raw value stored as the answer
    pub value: String,
    /// Display label shown in the transcript
    pub label: String,
    /// Short explanation shown under the label
    pub description: String,
}

impl ChoiceOption {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Discriminant of a [`Question`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    FreeText,
    DateRange,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::FreeText => "free_text",
            QuestionKind::DateRange => "date_range",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A survey question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    SingleChoice {
        id: String,
        prompt: String,
        options: Vec<ChoiceOption>,
    },
    FreeText {
        id: String,
        prompt: String,
        placeholder: String,
    },
    DateRange {
        id: String,
        prompt: String,
        placeholder: String,
    },
}

impl Question {
    pub fn single_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self::SingleChoice {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn free_text(
        id: impl Into<String>,
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::FreeText {
            id: id.into(),
            prompt: prompt.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn date_range(
        id: impl Into<String>,
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::DateRange {
            id: id.into(),
            prompt: prompt.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::SingleChoice { id, .. } | Self::FreeText { id, .. } | Self::DateRange { id, .. } => {
                id
            }
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::SingleChoice { prompt, .. }
            | Self::FreeText { prompt, .. }
            | Self::DateRange { prompt, .. } => prompt,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::SingleChoice { .. } => QuestionKind::SingleChoice,
            Self::FreeText { .. } => QuestionKind::FreeText,
            Self::DateRange { .. } => QuestionKind::DateRange,
        }
    }

    /// Input hint of a free-text or date question
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::FreeText { placeholder, .. } | Self::DateRange { placeholder, .. } => {
                Some(placeholder)
            }
            Self::SingleChoice { .. } => None,
        }
    }

    /// Options of a single-choice question, `None` for other kinds
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            Self::SingleChoice { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Look up an option by its raw value
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options()?.iter().find(|o| o.value == value)
    }
}

/// Ordered, immutable sequence of questions. Position is the step index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    questions: Vec<Question>,
}

impl Survey {
    /// Create a survey from an ordered question list
    ///
    /// # Panics
    /// Panics if `questions` is empty
    pub fn new(questions: Vec<Question>) -> Self {
        assert!(!questions.is_empty(), "Survey needs at least one question");
        Self { questions }
    }

    /// The five-step travel preference survey
    pub fn travel() -> Self {
        Self::new(vec![
            Question::single_choice(
                TRAVEL_TYPE,
                "어떤 여행을 선호하시나요?",
                vec![
                    ChoiceOption::new("adventure", "🏔️ 모험/액티비티", "등산, 수상스포츠, 익스트림 스포츠"),
                    ChoiceOption::new("culture", "🏛️ 문화/역사", "박물관, 유적지, 전통체험"),
                    ChoiceOption::new("nature", "🌿 자연/힐링", "국립공원, 해변, 온천"),
                    ChoiceOption::new("urban", "🏙️ 도시/쇼핑", "쇼핑몰, 카페, 도시 명소"),
                ],
            ),
            Question::single_choice(
                BUDGET,
                "여행 예산은 어느 정도인가요?",
                vec![
                    ChoiceOption::new("low", "💰 10만원 미만", "가성비 중심의 여행"),
                    ChoiceOption::new("medium", "💰💰 10-30만원", "적당한 예산의 여행"),
                    ChoiceOption::new("high", "💰💰💰 30만원 이상", "프리미엄 여행"),
                ],
            ),
            Question::single_choice(
                DURATION,
                "여행 기간은 얼마나 되나요?",
                vec![
                    ChoiceOption::new("day", "🌅 당일치기", "하루 여행"),
                    ChoiceOption::new("weekend", "🏖️ 1박 이상", "주말 여행"),
                ],
            ),
            Question::date_range(TRAVEL_DATE, "언제 여행을 떠나시나요?", "여행 날짜를 선택해주세요"),
            Question::single_choice(
                COMPANION,
                "누구와 함께 여행하시나요?",
                vec![
                    ChoiceOption::new("solo", "🚶 혼자", "나만의 시간"),
                    ChoiceOption::new("couple", "💑 연인/부부", "로맨틱한 여행"),
                    ChoiceOption::new("friends", "👥 친구들", "즐거운 단체 여행"),
                    ChoiceOption::new("family", "👨‍👩‍👧‍👦 가족", "가족과 함께"),
                ],
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; a survey is never empty
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn last_step(&self) -> usize {
        self.questions.len() - 1
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::travel()
    }
}
