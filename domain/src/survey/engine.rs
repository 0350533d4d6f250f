//! Questionnaire state machine.
//!
//! Drives a [`Survey`] one question at a time, owning the answers, the
//! chat transcript and the calendar sub-flow of the date question.
//!
//! # State Transitions
//!
//! ```text
//! Step(0) ──submit──> Step(1) ──submit──> ... ──submit──> Step(N-1)
//!    ^                  │                                    │ submit
//!    └──── retract ─────┘                                    v
//!                                         Step(N-1) <──── Complete
//!                                                  retract
//! ```
//!
//! Every transition moves by exactly one step. Rejected events return a
//! [`DomainError`] and leave the engine untouched.

use super::answers::Answers;
use super::question::{Question, QuestionKind, Survey};
use super::transcript::{ChatMessage, Origin, Transcript};
use crate::calendar::{DateRangeSelector, DateSelection, SelectOutcome, TripLength};
use crate::core::error::DomainError;
use chrono::NaiveDate;

/// What happened after an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to the given step; its question was appended to the transcript
    Advanced(usize),
    /// The last question was answered; the survey can be submitted
    ReadyToSubmit,
}

/// What happened after an accepted calendar click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateProgress {
    /// Range started, waiting for the end date
    Pending(DateSelection),
    /// The selection resolved and was submitted as the answer
    Answered(SubmitOutcome),
}

/// One survey session
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    survey: Survey,
    step: usize,
    answers: Answers,
    transcript: Transcript,
    date_selector: Option<DateRangeSelector>,
}

impl QuestionnaireEngine {
    /// Start a session; the transcript opens with the first question
    pub fn new(survey: Survey) -> Self {
        let mut transcript = Transcript::new();
        if let Some(first) = survey.get(0) {
            transcript.push(ChatMessage::ask(first));
        }
        Self {
            survey,
            step: 0,
            answers: Answers::new(),
            transcript,
            date_selector: None,
        }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.survey.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.survey.last_step()
    }

    pub fn current_question(&self) -> &Question {
        &self.survey.questions()[self.step]
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The current question has an answer
    pub fn can_proceed(&self) -> bool {
        self.answers.contains(self.current_question().id())
    }

    pub fn is_complete(&self) -> bool {
        self.survey
            .questions()
            .iter()
            .all(|q| self.answers.contains(q.id()))
    }

    /// Trip length mode for the date question, from the `duration` answer
    pub fn trip_length(&self) -> TripLength {
        TripLength::from_duration(self.answers.duration())
    }

    /// In-progress calendar selection (empty when no date question is active)
    pub fn date_selection(&self) -> DateSelection {
        self.date_selector
            .as_ref()
            .map(DateRangeSelector::selection)
            .unwrap_or_default()
    }

    /// Answer the current question
    ///
    /// Single-choice questions take an option value; the transcript shows its
    /// label. Free-text and date answers are stored trimmed.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        raw_value: &str,
    ) -> Result<SubmitOutcome, DomainError> {
        let question = &self.survey.questions()[self.step];
        if question.id() != question_id {
            return Err(DomainError::StepMismatch {
                expected: question.id().to_string(),
                got: question_id.to_string(),
            });
        }
        if self.answers.contains(question_id) {
            return Err(DomainError::AlreadyAnswered(question_id.to_string()));
        }

        let (value, display) = match question {
            Question::SingleChoice { .. } => {
                let option = question.option(raw_value).ok_or_else(|| DomainError::UnknownOption {
                    question_id: question_id.to_string(),
                    value: raw_value.to_string(),
                })?;
                (option.value.clone(), option.label.clone())
            }
            Question::FreeText { .. } | Question::DateRange { .. } => {
                let text = raw_value.trim();
                if text.is_empty() {
                    return Err(DomainError::EmptyAnswer(question_id.to_string()));
                }
                (text.to_string(), text.to_string())
            }
        };

        self.transcript
            .push(ChatMessage::reply(question, display, value.as_str()));
        self.answers.insert(question_id, value);
        self.date_selector = None;

        if self.step < self.survey.last_step() {
            self.step += 1;
            self.transcript
                .push(ChatMessage::ask(&self.survey.questions()[self.step]));
            Ok(SubmitOutcome::Advanced(self.step))
        } else {
            Ok(SubmitOutcome::ReadyToSubmit)
        }
    }

    /// Undo the most recent answer
    ///
    /// In the complete state this clears the final answer and stays on the
    /// last step; otherwise it steps back one question. Fails with
    /// [`DomainError::NothingToRetract`] on an unanswered first question,
    /// where leaving the survey is up to the caller.
    pub fn retract(&mut self) -> Result<usize, DomainError> {
        let current_id = self.survey.questions()[self.step].id();
        if self.answers.remove(current_id).is_some() {
            self.transcript.pop_if(Origin::User);
            self.date_selector = None;
            return Ok(self.step);
        }
        if self.step == 0 {
            return Err(DomainError::NothingToRetract);
        }

        self.step -= 1;
        self.answers.remove(self.survey.questions()[self.step].id());
        self.transcript.pop_if(Origin::System);
        self.transcript.pop_if(Origin::User);
        self.date_selector = None;
        Ok(self.step)
    }

    /// Feed a calendar click to the date question
    ///
    /// The trip length mode is read from the `duration` answer each time, so a
    /// changed answer after retraction restarts the selection in the new mode.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<DateProgress, DomainError> {
        let question = &self.survey.questions()[self.step];
        if question.kind() != QuestionKind::DateRange {
            return Err(DomainError::NotADateQuestion(question.id().to_string()));
        }
        if self.answers.contains(question.id()) {
            return Err(DomainError::AlreadyAnswered(question.id().to_string()));
        }
        let question_id = question.id().to_string();

        let mode = self.trip_length();
        if self.date_selector.as_ref().map(DateRangeSelector::mode) != Some(mode) {
            self.date_selector = Some(DateRangeSelector::new(mode));
        }
        let selector = self
            .date_selector
            .get_or_insert_with(|| DateRangeSelector::new(mode));

        match selector.select(date, today)? {
            SelectOutcome::Pending => Ok(DateProgress::Pending(selector.selection())),
            SelectOutcome::Resolved(value) => self
                .submit_answer(&question_id, &value)
                .map(DateProgress::Answered),
        }
    }

    /// The full answer map, once every question is answered
    pub fn finalize(&self) -> Result<Answers, DomainError> {
        match self
            .survey
            .questions()
            .iter()
            .find(|q| !self.answers.contains(q.id()))
        {
            Some(missing) => Err(DomainError::Incomplete(missing.id().to_string())),
            None => Ok(self.answers.clone()),
        }
    }
}

impl Default for QuestionnaireEngine {
    fn default() -> Self {
        Self::new(Survey::travel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::question::{BUDGET, COMPANION, DURATION, TRAVEL_DATE, TRAVEL_TYPE};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot(engine: &QuestionnaireEngine) -> (usize, Answers, Transcript) {
        (
            engine.step(),
            engine.answers().clone(),
            engine.transcript().clone(),
        )
    }

    #[test]
    fn test_initial_state() {
        let engine = QuestionnaireEngine::default();
        assert_eq!(engine.step(), 0);
        assert!(engine.answers().is_empty());
        assert_eq!(engine.transcript().len(), 1);
        let first = &engine.transcript().messages()[0];
        assert!(first.is_system());
        assert_eq!(first.question_id, TRAVEL_TYPE);
    }

    #[test]
    fn test_choice_stores_value_and_shows_label() {
        let mut engine = QuestionnaireEngine::default();
        let outcome = engine.submit_answer(TRAVEL_TYPE, "culture").unwrap();

        assert_eq!(outcome, SubmitOutcome::Advanced(1));
        assert_eq!(engine.answers().travel_type(), Some("culture"));
        let reply = &engine.transcript().messages()[1];
        assert!(reply.is_user());
        assert_eq!(reply.text, "🏛️ 문화/역사");
        assert_eq!(reply.value.as_deref(), Some("culture"));
        assert_eq!(engine.transcript().last().unwrap().question_id, BUDGET);
    }

    #[test]
    fn test_rejected_answers_leave_state_untouched() {
        let mut engine = QuestionnaireEngine::default();
        let before = snapshot(&engine);

        assert!(matches!(
            engine.submit_answer(BUDGET, "low"),
            Err(DomainError::StepMismatch { .. })
        ));
        assert!(matches!(
            engine.submit_answer(TRAVEL_TYPE, "space"),
            Err(DomainError::UnknownOption { .. })
        ));
        assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn test_submit_then_retract_is_identity_at_every_step() {
        let values = ["nature", "medium", "day", "2024-05-01", "solo"];
        let mut engine = QuestionnaireEngine::default();

        for value in values {
            let id = engine.current_question().id().to_string();
            let before = snapshot(&engine);

            engine.submit_answer(&id, value).unwrap();
            engine.retract().unwrap();
            assert_eq!(snapshot(&engine), before, "retract did not undo '{}'", id);

            engine.submit_answer(&id, value).unwrap();
        }
        assert!(engine.is_complete());
    }

    #[test]
    fn test_retract_at_first_step_is_rejected() {
        let mut engine = QuestionnaireEngine::default();
        let before = snapshot(&engine);

        assert_eq!(engine.retract(), Err(DomainError::NothingToRetract));
        assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn test_retract_steps_back_one_question() {
        let mut engine = QuestionnaireEngine::default();
        engine.submit_answer(TRAVEL_TYPE, "urban").unwrap();
        engine.submit_answer(BUDGET, "high").unwrap();

        assert_eq!(engine.retract(), Ok(1));
        assert!(engine.answers().budget().is_none());
        assert_eq!(engine.answers().travel_type(), Some("urban"));
        let last = engine.transcript().last().unwrap();
        assert!(last.is_system());
        assert_eq!(last.question_id, BUDGET);
    }

    #[test]
    fn test_full_survey_completion() {
        let mut engine = QuestionnaireEngine::default();
        engine.submit_answer(TRAVEL_TYPE, "adventure").unwrap();
        engine.submit_answer(BUDGET, "high").unwrap();
        engine.submit_answer(DURATION, "weekend").unwrap();
        engine
            .submit_answer(TRAVEL_DATE, "2024-03-01~2024-03-03")
            .unwrap();
        assert!(!engine.is_complete());
        assert_eq!(
            engine.finalize(),
            Err(DomainError::Incomplete(COMPANION.to_string()))
        );

        let outcome = engine.submit_answer(COMPANION, "friends").unwrap();
        assert_eq!(outcome, SubmitOutcome::ReadyToSubmit);
        assert!(engine.is_complete());

        let answers = engine.finalize().unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers.get(TRAVEL_TYPE), Some("adventure"));
        assert_eq!(answers.get(BUDGET), Some("high"));
        assert_eq!(answers.get(DURATION), Some("weekend"));
        assert_eq!(answers.get(TRAVEL_DATE), Some("2024-03-01~2024-03-03"));
        assert_eq!(answers.get(COMPANION), Some("friends"));
        assert_eq!(engine.finalize().unwrap(), answers);
    }

    #[test]
    fn test_complete_state_rejects_further_answers() {
        let mut engine = QuestionnaireEngine::new(Survey::new(vec![Question::free_text(
            "note", "메모", "",
        )]));
        assert_eq!(
            engine.submit_answer("note", "  hello ").unwrap(),
            SubmitOutcome::ReadyToSubmit
        );
        assert_eq!(engine.answers().get("note"), Some("hello"));
        assert_eq!(
            engine.submit_answer("note", "again"),
            Err(DomainError::AlreadyAnswered("note".to_string()))
        );
    }

    #[test]
    fn test_date_question_multi_day_flow() {
        let today = date(2024, 2, 20);
        let mut engine = QuestionnaireEngine::default();
        engine.submit_answer(TRAVEL_TYPE, "nature").unwrap();
        engine.submit_answer(BUDGET, "low").unwrap();

        assert!(matches!(
            engine.select_date(date(2024, 3, 1), today),
            Err(DomainError::NotADateQuestion(_))
        ));
        engine.submit_answer(DURATION, "weekend").unwrap();

        assert!(matches!(
            engine.select_date(date(2024, 2, 19), today),
            Err(DomainError::PastDate(_))
        ));
        let pending = engine.select_date(date(2024, 3, 1), today).unwrap();
        assert_eq!(
            pending,
            DateProgress::Pending(DateSelection {
                start_date: Some(date(2024, 3, 1)),
                end_date: None
            })
        );
        assert!(!engine.can_proceed());

        let answered = engine.select_date(date(2024, 3, 3), today).unwrap();
        assert_eq!(answered, DateProgress::Answered(SubmitOutcome::Advanced(4)));
        assert_eq!(
            engine.answers().get(TRAVEL_DATE),
            Some("2024년 3월 1일 (금) ~ 2024년 3월 3일 (일)")
        );
        assert!(engine.date_selection().is_empty());
    }

    #[test]
    fn test_date_question_single_day_resolves_immediately() {
        let today = date(2024, 2, 20);
        let mut engine = QuestionnaireEngine::default();
        engine.submit_answer(TRAVEL_TYPE, "nature").unwrap();
        engine.submit_answer(BUDGET, "low").unwrap();
        engine.submit_answer(DURATION, "day").unwrap();

        let progress = engine.select_date(today, today).unwrap();
        assert_eq!(progress, DateProgress::Answered(SubmitOutcome::Advanced(4)));
        assert_eq!(engine.answers().get(TRAVEL_DATE), Some("2024년 2월 20일 (화)"));
    }

    #[test]
    fn test_retract_discards_pending_date_selection() {
        let today = date(2024, 2, 20);
        let mut engine = QuestionnaireEngine::default();
        engine.submit_answer(TRAVEL_TYPE, "nature").unwrap();
        engine.submit_answer(BUDGET, "low").unwrap();
        engine.submit_answer(DURATION, "weekend").unwrap();
        engine.select_date(date(2024, 3, 1), today).unwrap();

        engine.retract().unwrap();
        assert!(engine.date_selection().is_empty());
        engine.submit_answer(DURATION, "day").unwrap();
        assert_eq!(engine.trip_length(), TripLength::SingleDay);
    }

    #[test]
    fn test_select_date_then_retract_restores_state() {
        let today = date(2024, 2, 20);
        for (duration, clicks) in [
            ("day", vec![date(2024, 3, 1)]),
            ("weekend", vec![date(2024, 3, 1), date(2024, 3, 3)]),
        ] {
            let mut engine = QuestionnaireEngine::default();
            engine.submit_answer(TRAVEL_TYPE, "nature").unwrap();
            engine.submit_answer(BUDGET, "low").unwrap();
            engine.submit_answer(DURATION, duration).unwrap();
            let before = snapshot(&engine);

            let mut last = None;
            for day in clicks {
                last = Some(engine.select_date(day, today).unwrap());
            }
            assert_eq!(last, Some(DateProgress::Answered(SubmitOutcome::Advanced(4))));
            assert_eq!(engine.current_question().id(), COMPANION);

            assert_eq!(engine.retract().unwrap(), 3);
            assert_eq!(snapshot(&engine), before, "retract did not undo {} dates", duration);
            assert!(engine.date_selection().is_empty());
            assert_eq!(engine.answers().get(TRAVEL_DATE), None);
        }
    }
}
