//! Survey session
//!
//! Wraps a [`QuestionnaireEngine`] so every accepted transition is also
//! written to the survey event log. Rejected events are returned untouched
//! and leave no trace in the log.

use crate::ports::survey_logger::{NoSurveyLogger, SurveyEvent, SurveyLogger};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use tripmate_domain::{
    Answers, DateProgress, DomainError, QuestionnaireEngine, SubmitOutcome, Survey,
};

/// Logged survey run
pub struct SurveySession {
    engine: QuestionnaireEngine,
    logger: Arc<dyn SurveyLogger>,
}

impl SurveySession {
    pub fn new(survey: Survey) -> Self {
        Self::from_engine(QuestionnaireEngine::new(survey))
    }

    pub fn from_engine(engine: QuestionnaireEngine) -> Self {
        Self {
            engine,
            logger: Arc::new(NoSurveyLogger),
        }
    }

    /// Attach a logger; the currently shown question is logged right away
    pub fn with_logger(mut self, logger: Arc<dyn SurveyLogger>) -> Self {
        self.logger = logger;
        self.log_question();
        self
    }

    pub fn engine(&self) -> &QuestionnaireEngine {
        &self.engine
    }

    /// Answer whatever question is current
    pub fn answer(&mut self, value: &str) -> Result<SubmitOutcome, DomainError> {
        let question_id = self.engine.current_question().id().to_string();
        let outcome = self.engine.submit_answer(&question_id, value)?;
        self.after_answer(&question_id, outcome);
        Ok(outcome)
    }

    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<DateProgress, DomainError> {
        let question_id = self.engine.current_question().id().to_string();
        let progress = self.engine.select_date(date, today)?;
        match &progress {
            DateProgress::Pending(selection) => {
                debug!("Range start {:?}, waiting for end", selection.start_date);
            }
            DateProgress::Answered(outcome) => self.after_answer(&question_id, *outcome),
        }
        Ok(progress)
    }

    pub fn retract(&mut self) -> Result<usize, DomainError> {
        let step = self.engine.retract()?;
        self.logger.log(SurveyEvent::new(
            "retract",
            json!({
                "step": step,
                "questionId": self.engine.current_question().id(),
            }),
        ));
        Ok(step)
    }

    pub fn finalize(&self) -> Result<Answers, DomainError> {
        self.engine.finalize()
    }

    fn after_answer(&self, question_id: &str, outcome: SubmitOutcome) {
        self.logger.log(SurveyEvent::new(
            "answer",
            json!({
                "questionId": question_id,
                "value": self.engine.answers().get(question_id),
            }),
        ));
        if let SubmitOutcome::Advanced(_) = outcome {
            self.log_question();
        }
    }

    fn log_question(&self) {
        let question = self.engine.current_question();
        self.logger.log(SurveyEvent::new(
            "question",
            json!({
                "step": self.engine.step(),
                "questionId": question.id(),
                "kind": question.kind().as_str(),
            }),
        ));
    }
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new(Survey::travel())
    }
}
