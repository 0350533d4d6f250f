//! Line parsing for the survey REPL

use chrono::NaiveDate;
use tripmate_domain::QuestionKind;

/// One parsed line of survey input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyCommand {
    /// Blank line; submits once every question is answered
    Empty,
    Back,
    Quit,
    Help,
    Submit,
    PrevMonth,
    NextMonth,
    /// 1-based option number
    Choose(usize),
    /// Full calendar date
    Date(NaiveDate),
    /// Day of the month currently shown
    Day(u32),
    Text(String),
    /// Input that means nothing for the current question
    Unknown(String),
}

/// Parse `line` in the context of the current question's kind
pub fn parse_input(line: &str, kind: QuestionKind) -> SurveyCommand {
    let line = line.trim();
    if line.is_empty() {
        return SurveyCommand::Empty;
    }

    match line {
        "/back" | "/b" | "/undo" => return SurveyCommand::Back,
        "/quit" | "/exit" | "/q" => return SurveyCommand::Quit,
        "/help" | "/h" | "/?" => return SurveyCommand::Help,
        "/submit" | "/s" => return SurveyCommand::Submit,
        _ if line.starts_with('/') => return SurveyCommand::Unknown(line.to_string()),
        _ => {}
    }

    match kind {
        QuestionKind::SingleChoice => match line.parse::<usize>() {
            Ok(n) => SurveyCommand::Choose(n),
            Err(_) => SurveyCommand::Text(line.to_string()),
        },
        QuestionKind::FreeText => SurveyCommand::Text(line.to_string()),
        QuestionKind::DateRange => parse_date_input(line),
    }
}

fn parse_date_input(line: &str) -> SurveyCommand {
    match line {
        "<" => return SurveyCommand::PrevMonth,
        ">" => return SurveyCommand::NextMonth,
        _ => {}
    }
    if let Ok(date) = NaiveDate::parse_from_str(line, "%Y-%m-%d") {
        return SurveyCommand::Date(date);
    }
    match line.parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => SurveyCommand::Day(day),
        _ => SurveyCommand::Unknown(line.to_string()),
    }
}
