//! REPL (Read-Eval-Print Loop) for the travel survey

use crate::ConsoleFormatter;
use crate::{ProgressReporter, SimpleProgress};
use crate::config::ReplConfig;
use crate::survey::input::{SurveyCommand, parse_input};
use crate::view;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;
use tripmate_application::{
    KeyValueStore, PlaceCatalogGateway, SubmitSurveyInput, SubmitSurveyOutput,
    SubmitSurveyUseCase, SurveySession,
};
use tripmate_domain::{CalendarMonth, DateProgress, DomainError, Question, SubmitOutcome};

/// What the loop does after one command
#[derive(Debug)]
pub enum Flow {
    Continue,
    Exit,
    Submitted(Box<SubmitSurveyOutput>),
}

/// Interactive survey REPL
pub struct SurveyRepl<G: PlaceCatalogGateway + 'static, S: KeyValueStore + 'static> {
    session: SurveySession,
    use_case: SubmitSurveyUseCase<G, S>,
    config: ReplConfig,
    today: NaiveDate,
    /// Month shown by the date picker
    month: CalendarMonth,
}

impl<G: PlaceCatalogGateway + 'static, S: KeyValueStore + 'static> SurveyRepl<G, S> {
    pub fn new(session: SurveySession, use_case: SubmitSurveyUseCase<G, S>) -> Self {
        let today = Local::now().date_naive();
        Self {
            session,
            use_case,
            config: ReplConfig::default(),
            today,
            month: CalendarMonth::containing(today),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Pin "today" for past-date checks
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self.month = CalendarMonth::containing(today);
        self
    }

    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Run the interactive REPL
    ///
    /// Returns the submission output, or `None` when the user left early.
    pub async fn run(&mut self) -> RlResult<Option<SubmitSurveyOutput>> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.show_current();

        let outcome = loop {
            let prompt = if view::can_submit(self.session.engine()) {
                format!("[{}] > ", view::submit_label(false))
            } else {
                "> ".to_string()
            };

            match rl.readline(&prompt) {
                Ok(line) => {
                    let kind = self.session.engine().current_question().kind();
                    let command = parse_input(&line, kind);
                    if let SurveyCommand::Text(text) = &command {
                        let _ = rl.add_history_entry(text.as_str());
                    }
                    match self.handle(command).await {
                        Flow::Continue => {}
                        Flow::Exit => break None,
                        Flow::Submitted(output) => break Some(*output),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break None;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break None;
                }
            }
        };

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(outcome)
    }

    /// Apply one parsed command
    ///
    /// Input the engine rejects is dropped without a message; the prompt
    /// simply stays where it was.
    pub async fn handle(&mut self, command: SurveyCommand) -> Flow {
        match command {
            SurveyCommand::Quit => {
                println!("설문을 종료합니다.");
                Flow::Exit
            }
            SurveyCommand::Help => {
                println!(
                    "{}",
                    ConsoleFormatter::survey_help(self.session.engine().current_question())
                );
                Flow::Continue
            }
            SurveyCommand::Back => match self.session.retract() {
                Ok(step) => {
                    debug!("Retracted to step {}", step);
                    self.month = CalendarMonth::containing(self.today);
                    self.show_current();
                    Flow::Continue
                }
                Err(DomainError::NothingToRetract) => {
                    println!("설문을 종료합니다.");
                    Flow::Exit
                }
                Err(e) => {
                    debug!("Retract rejected: {}", e);
                    Flow::Continue
                }
            },
            SurveyCommand::Submit | SurveyCommand::Empty
                if view::can_submit(self.session.engine()) =>
            {
                self.submit().await
            }
            SurveyCommand::Submit => {
                println!("{}", "아직 답하지 않은 질문이 있어요.".dimmed());
                Flow::Continue
            }
            SurveyCommand::Empty => Flow::Continue,
            SurveyCommand::PrevMonth => {
                self.month = self.month.previous();
                self.show_calendar();
                Flow::Continue
            }
            SurveyCommand::NextMonth => {
                self.month = self.month.next();
                self.show_calendar();
                Flow::Continue
            }
            SurveyCommand::Choose(number) => {
                let value = self
                    .session
                    .engine()
                    .current_question()
                    .options()
                    .and_then(|options| options.get(number.checked_sub(1)?))
                    .map(|option| option.value.clone());
                match value {
                    Some(value) => self.answer(&value).await,
                    None => {
                        debug!("No option numbered {}", number);
                        Flow::Continue
                    }
                }
            }
            SurveyCommand::Text(text) => self.answer(&text).await,
            SurveyCommand::Date(date) => {
                self.month = CalendarMonth::containing(date);
                self.select_date(date).await
            }
            SurveyCommand::Day(day) => match self.month.day(day) {
                Some(date) => self.select_date(date).await,
                None => {
                    debug!("{} has no day {}", self.month.label(), day);
                    Flow::Continue
                }
            },
            SurveyCommand::Unknown(input) => {
                println!("알 수 없는 입력입니다: {}", input);
                println!("/help 로 사용법을 확인하세요");
                Flow::Continue
            }
        }
    }

    async fn answer(&mut self, value: &str) -> Flow {
        match self.session.answer(value) {
            Ok(outcome) => self.after_answer(outcome).await,
            Err(e) => debug!("Answer rejected: {}", e),
        }
        Flow::Continue
    }

    async fn select_date(&mut self, date: NaiveDate) -> Flow {
        match self.session.select_date(date, self.today) {
            Ok(DateProgress::Pending(_)) => self.show_calendar(),
            Ok(DateProgress::Answered(outcome)) => self.after_answer(outcome).await,
            Err(e) => debug!("Date rejected: {}", e),
        }
        Flow::Continue
    }

    async fn after_answer(&mut self, outcome: SubmitOutcome) {
        if let Some(reply) = self
            .session
            .engine()
            .transcript()
            .messages()
            .iter()
            .rev()
            .find(|m| m.is_user())
        {
            println!("{}", ConsoleFormatter::format_answer(&reply.text));
        }

        match outcome {
            SubmitOutcome::Advanced(_) => {
                if !self.config.pacing.is_zero() {
                    tokio::time::sleep(self.config.pacing).await;
                }
                self.month = CalendarMonth::containing(self.today);
                self.show_current();
            }
            SubmitOutcome::ReadyToSubmit => {
                println!(
                    "\n{} {}",
                    "✨".bold(),
                    format!("Enter 또는 /submit: {}", view::submit_label(false)).cyan()
                );
            }
        }
    }

    async fn submit(&mut self) -> Flow {
        let input = match SubmitSurveyInput::from_engine(self.session.engine()) {
            Ok(input) => input,
            Err(e) => {
                debug!("Submit rejected: {}", e);
                return Flow::Continue;
            }
        };

        let output = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute_with_progress(input, &SimpleProgress).await
        };
        Flow::Submitted(Box::new(output))
    }

    fn show_current(&self) {
        let engine = self.session.engine();
        println!("{}", ConsoleFormatter::format_question(engine));
        if let Question::DateRange { .. } = engine.current_question() {
            self.show_calendar();
        }
    }

    fn show_calendar(&self) {
        let engine = self.session.engine();
        println!(
            "{}",
            ConsoleFormatter::format_calendar(
                self.month,
                engine.date_selection(),
                engine.trip_length(),
                self.today,
            )
        );
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Tripmate - 여행 취향 알아보기         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("번호를 입력해 답하고, /back 으로 이전 질문으로 돌아갈 수 있어요.");
        println!("/help 로 도움말을 볼 수 있어요.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;
    use tripmate_application::{
        GatewayError, InMemoryStore, KeyValueStoreExt, LocalCatalog, RECOMMENDATIONS_KEY,
        ResultSource,
    };
    use tripmate_domain::{
        Category, EstimatedCost, Feedback, FeedbackReceipt, Place, PlaceDetails, PlaceId,
        RecommendationRequest, RecommendationResult, format_range,
    };

    struct OfflineGateway;

    #[async_trait]
    impl PlaceCatalogGateway for OfflineGateway {
        async fn recommend(
            &self,
            _request: &RecommendationRequest,
        ) -> Result<RecommendationResult, GatewayError> {
            Err(GatewayError::Disabled)
        }

        async fn place_details(&self, _id: PlaceId) -> Result<PlaceDetails, GatewayError> {
            Err(GatewayError::Disabled)
        }

        async fn send_feedback(
            &self,
            _feedback: &Feedback,
        ) -> Result<FeedbackReceipt, GatewayError> {
            Err(GatewayError::Disabled)
        }
    }

    struct TwoPlaces(Vec<Place>);

    impl LocalCatalog for TwoPlaces {
        fn places(&self) -> &[Place] {
            &self.0
        }

        fn details(&self, _id: PlaceId) -> Option<PlaceDetails> {
            None
        }
    }

    fn place(id: u64, name: &str, category: Category, rating: f64) -> Place {
        Place {
            id: PlaceId::new(id),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            rating,
            category,
            tags: Vec::new(),
            address: String::new(),
            estimated_cost: EstimatedCost::new("무료"),
            duration: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn repl(store: Arc<InMemoryStore>) -> SurveyRepl<OfflineGateway, InMemoryStore> {
        let catalog = Arc::new(TwoPlaces(vec![
            place(1, "경복궁", Category::Culture, 4.5),
            place(2, "남산타워", Category::Urban, 4.2),
        ]));
        let use_case = SubmitSurveyUseCase::new(Arc::new(OfflineGateway), store, catalog);
        SurveyRepl::new(SurveySession::default(), use_case)
            .with_config(ReplConfig {
                show_progress: false,
                pacing: Duration::ZERO,
                history_file: None,
            })
            .with_today(date(2024, 3, 1))
    }

    #[tokio::test]
    async fn test_full_survey_submits_locally() {
        let store = Arc::new(InMemoryStore::new());
        let mut repl = repl(store.clone());

        for command in [
            SurveyCommand::Choose(2),
            SurveyCommand::Choose(1),
            SurveyCommand::Choose(1),
            SurveyCommand::Day(8),
            SurveyCommand::Text("solo".to_string()),
        ] {
            assert!(matches!(repl.handle(command).await, Flow::Continue));
        }
        let answers = repl.session().engine().answers();
        assert_eq!(answers.get("travelType"), Some("culture"));
        assert_eq!(answers.get("travelDate"), Some("2024년 3월 8일 (금)"));

        let Flow::Submitted(output) = repl.handle(SurveyCommand::Empty).await else {
            panic!("expected submission");
        };
        assert_eq!(output.source, ResultSource::LocalFallback);
        assert_eq!(output.result.places[0].name, "경복궁");
        let stored: Option<RecommendationResult> = store.get_json(RECOMMENDATIONS_KEY);
        assert_eq!(stored, Some(output.result));
    }

    #[tokio::test]
    async fn test_invalid_input_is_ignored() {
        let mut repl = repl(Arc::new(InMemoryStore::new()));

        repl.handle(SurveyCommand::Choose(9)).await;
        repl.handle(SurveyCommand::Choose(0)).await;
        repl.handle(SurveyCommand::Text("space".to_string())).await;
        repl.handle(SurveyCommand::Submit).await;

        assert_eq!(repl.session().engine().step(), 0);
        assert!(repl.session().engine().answers().is_empty());
    }

    #[tokio::test]
    async fn test_back_on_first_question_exits() {
        let mut repl = repl(Arc::new(InMemoryStore::new()));
        assert!(matches!(repl.handle(SurveyCommand::Back).await, Flow::Exit));

        let mut repl = repl_after_first_answer().await;
        assert!(matches!(repl.handle(SurveyCommand::Back).await, Flow::Continue));
        assert_eq!(repl.session().engine().step(), 0);
    }

    async fn repl_after_first_answer() -> SurveyRepl<OfflineGateway, InMemoryStore> {
        let mut repl = repl(Arc::new(InMemoryStore::new()));
        repl.handle(SurveyCommand::Choose(1)).await;
        repl
    }

    #[tokio::test]
    async fn test_weekend_range_and_month_navigation() {
        let mut repl = repl(Arc::new(InMemoryStore::new()));
        repl.handle(SurveyCommand::Choose(3)).await;
        repl.handle(SurveyCommand::Choose(2)).await;
        repl.handle(SurveyCommand::Choose(2)).await;

        repl.handle(SurveyCommand::NextMonth).await;
        assert_eq!(repl.month(), CalendarMonth::new(2024, 4).unwrap());

        repl.handle(SurveyCommand::Day(5)).await;
        assert_eq!(repl.session().engine().step(), 3);
        assert_eq!(
            repl.session().engine().date_selection().start_date,
            Some(date(2024, 4, 5))
        );

        repl.handle(SurveyCommand::Date(date(2024, 4, 7))).await;
        assert_eq!(
            repl.session().engine().answers().get("travelDate"),
            Some(format_range(date(2024, 4, 5), date(2024, 4, 7)).as_str())
        );
        assert_eq!(repl.session().engine().step(), 4);
    }

    #[tokio::test]
    async fn test_past_day_is_ignored() {
        let mut repl = repl(Arc::new(InMemoryStore::new())).with_today(date(2024, 3, 10));
        repl.handle(SurveyCommand::Choose(1)).await;
        repl.handle(SurveyCommand::Choose(1)).await;
        repl.handle(SurveyCommand::Choose(1)).await;

        repl.handle(SurveyCommand::Day(9)).await;

        assert_eq!(repl.session().engine().step(), 3);
        assert!(repl.session().engine().date_selection().is_empty());
    }
}
