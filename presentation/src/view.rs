//! View-model derivation
//!
//! Pure functions turning engine and catalog state into what the terminal
//! shows. Nothing here prints or mutates.

use chrono::NaiveDate;
use tripmate_domain::{
    CalendarMonth, ChoiceOption, DateRangeSelector, DateSelection, Place, Question,
    QuestionnaireEngine, TripLength,
};

/// Progress indicator, e.g. `2/5`
pub fn progress_label(engine: &QuestionnaireEngine) -> String {
    format!("{}/{}", engine.step() + 1, engine.total_steps())
}

/// Whether the submit action should be offered
pub fn can_submit(engine: &QuestionnaireEngine) -> bool {
    engine.is_last_step() && engine.can_proceed()
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "추천 받는 중..."
    } else {
        "맞춤 추천 받기"
    }
}

/// One option row of a single-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    /// 1-based number typed to pick the option
    pub number: usize,
    pub option: &'a ChoiceOption,
    /// This option is the stored answer
    pub selected: bool,
    /// The question is current and still unanswered
    pub clickable: bool,
}

/// Option rows for `question` as seen from the engine's current state
pub fn option_views<'a>(
    engine: &QuestionnaireEngine,
    question: &'a Question,
) -> Vec<OptionView<'a>> {
    let answer = engine.answers().get(question.id());
    let clickable = engine.current_question().id() == question.id() && answer.is_none();
    question
        .options()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, option)| OptionView {
            number: i + 1,
            option,
            selected: answer == Some(option.value.as_str()),
            clickable,
        })
        .collect()
}

/// One day of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Not in the past
    pub selectable: bool,
    /// Start or end of the selection
    pub selected: bool,
    /// Inside a finished range
    pub in_range: bool,
    pub today: bool,
}

/// Sunday-first grid for `month`; `None` pads the first week
pub fn calendar_cells(
    month: CalendarMonth,
    selection: DateSelection,
    today: NaiveDate,
) -> Vec<Option<CalendarCell>> {
    month
        .cells()
        .into_iter()
        .map(|cell| {
            cell.map(|date| CalendarCell {
                date,
                selectable: DateRangeSelector::is_selectable(date, today),
                selected: selection.is_endpoint(date),
                in_range: selection.contains(date),
                today: date == today,
            })
        })
        .collect()
}

/// Whether the start/end summary line is shown under the calendar
pub fn shows_range_summary(mode: TripLength, selection: DateSelection) -> bool {
    mode == TripLength::MultiDay && selection.start_date.is_some()
}

/// Rank badge of a recommendation card
pub fn medal_label(index: usize) -> &'static str {
    match index {
        0 => "🥇 최고 추천",
        1 => "🥈 추천",
        _ => "🥉 추천",
    }
}

/// One star per whole rating point
pub fn star_bar(place: &Place) -> String {
    "⭐".repeat(place.stars())
}

pub fn bookmark_icon(bookmarked: bool) -> &'static str {
    if bookmarked { "❤️" } else { "🤍" }
}
