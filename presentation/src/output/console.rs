//! Console output formatter for survey screens and recommendations

use crate::output::formatter::OutputFormatter;
use crate::view::{self, CalendarCell};
use chrono::NaiveDate;
use colored::Colorize;
use tripmate_domain::{
    CalendarMonth, DateSelection, Place, PlaceDetails, Question, QuestionnaireEngine,
    RecommendationResult, TripLength, format_date, weekday_headers,
};

/// Formats survey prompts and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Ranked recommendation cards
    pub fn format_results(result: &RecommendationResult) -> String {
        if result.is_empty() {
            return Self::no_results();
        }

        let mut output = String::new();
        output.push_str(&Self::header("당신을 위한 특별한 여행지를 찾았어요!"));
        output.push('\n');

        if !result.message.is_empty() {
            output.push_str(&format!("{}\n", result.message.dimmed()));
        }
        if !result.location.is_empty() {
            output.push_str(&format!("{} {}\n", "📍 기준 위치:".cyan().bold(), result.location));
        }

        for (index, place) in result.places.iter().enumerate() {
            output.push_str(&Self::place_card(index, place));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Detail view of one place
    pub fn format_details(details: &PlaceDetails, bookmarked: bool) -> String {
        let place = &details.place;
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} {}",
            place.name,
            view::bookmark_icon(bookmarked)
        )));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({}개 리뷰)\n",
            view::star_bar(place).yellow(),
            place.rating,
            details.review_count
        ));
        output.push_str(&format!("{}{}\n\n", place.category.label(), Self::tags(&place.tags)));
        output.push_str(&place.description);
        output.push('\n');

        output.push_str(&Self::section_header("방문 정보"));
        for (label, value) in [
            ("위치", place.address.as_str()),
            ("입장료", place.estimated_cost.as_str()),
            ("소요시간", place.duration.as_str()),
            ("운영시간", details.opening_hours.as_str()),
            ("연락처", details.contact.as_str()),
        ] {
            if !value.is_empty() {
                output.push_str(&format!("  {:<8} {}\n", label.cyan(), value));
            }
        }

        if !details.facilities.is_empty() {
            output.push_str(&Self::section_header("편의시설"));
            output.push_str(&format!("  {}\n", details.facilities.join(" · ")));
        }
        if !details.nearby_places.is_empty() {
            output.push_str(&Self::section_header("주변 명소"));
            output.push_str(&format!("  {}\n", details.nearby_places.join(" · ")));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_bookmarks(places: &[Place]) -> String {
        if places.is_empty() {
            return format!("{}\n", "북마크한 장소가 없어요.".dimmed());
        }
        let mut output = format!("{}\n", "북마크한 장소".cyan().bold());
        for place in places {
            output.push_str(&format!(
                "  {} {} {} {}\n",
                view::bookmark_icon(true),
                format!("[{}]", place.id).dimmed(),
                place.name.bold(),
                place.category.label()
            ));
        }
        output
    }

    pub fn no_results() -> String {
        format!(
            "{}\n{}\n",
            "추천 결과를 불러올 수 없어요".red().bold(),
            "`tripmate survey`로 설문을 먼저 진행해주세요.".dimmed()
        )
    }

    // ==================== Survey Screens ====================

    /// Current question with progress and its input affordance
    pub fn format_question(engine: &QuestionnaireEngine) -> String {
        let question = engine.current_question();
        let mut output = format!(
            "\n{} {} {}\n",
            "🤖".bold(),
            question.prompt().bold(),
            format!("[{}]", view::progress_label(engine)).dimmed()
        );

        match question {
            Question::SingleChoice { .. } => {
                for row in view::option_views(engine, question) {
                    let line = format!("{}. {}", row.number, row.option.label);
                    let line = if row.selected {
                        line.green().bold().to_string()
                    } else if row.clickable {
                        line
                    } else {
                        line.dimmed().to_string()
                    };
                    output.push_str(&format!(
                        "   {}  {}\n",
                        line,
                        row.option.description.dimmed()
                    ));
                }
            }
            Question::FreeText { placeholder, .. } | Question::DateRange { placeholder, .. } => {
                output.push_str(&format!("   {}\n", placeholder.dimmed()));
            }
        }
        output
    }

    /// The user's answer bubble
    pub fn format_answer(text: &str) -> String {
        format!("{:>40} {}", text.green(), "🙋")
    }

    /// Month grid with selection highlights
    pub fn format_calendar(
        month: CalendarMonth,
        selection: DateSelection,
        mode: TripLength,
        today: NaiveDate,
    ) -> String {
        let mut output = format!("\n   {}   {}   {}\n", "<".dimmed(), month.label().bold(), ">".dimmed());
        output.push_str("  ");
        for header in weekday_headers() {
            output.push_str(&format!(" {:>2}", header));
        }
        output.push('\n');

        for week in view::calendar_cells(month, selection, today).chunks(7) {
            output.push_str("  ");
            for cell in week {
                output.push(' ');
                output.push_str(&Self::calendar_cell(cell.as_ref()));
            }
            output.push('\n');
        }

        if view::shows_range_summary(mode, selection)
            && let Some(start) = selection.start_date
        {
            output.push_str(&format!("\n   시작일: {}", format_date(start)));
            if let Some(end) = selection.end_date {
                output.push_str(&format!(" → 종료일: {}", format_date(end)));
            }
            output.push('\n');
        }
        output
    }

    pub fn survey_help(question: &Question) -> String {
        let mut lines = vec![format!("{}", "명령어:".cyan().bold())];
        match question {
            Question::SingleChoice { .. } => lines.push("  <번호>          보기 선택".to_string()),
            Question::FreeText { .. } => lines.push("  <텍스트>        답변 입력".to_string()),
            Question::DateRange { .. } => {
                lines.push("  <일> | YYYY-MM-DD   날짜 선택".to_string());
                lines.push("  < / >           이전 달 / 다음 달".to_string());
            }
        }
        lines.push("  /back           이전 질문으로".to_string());
        lines.push("  /quit           설문 종료".to_string());
        lines.join("\n")
    }

    // ==================== Helpers ====================

    fn place_card(index: usize, place: &Place) -> String {
        let mut card = format!(
            "\n{}  {}  {} {}\n",
            view::medal_label(index).yellow().bold(),
            place.name.bold(),
            "⭐",
            place.rating
        );
        card.push_str(&format!("   {}{}\n", place.category.label(), Self::tags(&place.tags)));
        if !place.description.is_empty() {
            card.push_str(&format!("{}\n", Self::indent(&place.description, "   ")));
        }
        card.push_str(&format!(
            "   📍 {}  💰 {}  ⏰ {}\n",
            place.address,
            place.estimated_cost.as_str(),
            place.duration
        ));
        card.push_str(&format!(
            "   {}\n",
            format!("자세히 보기: tripmate place {}", place.id).dimmed()
        ));
        card
    }

    fn calendar_cell(cell: Option<&CalendarCell>) -> String {
        let Some(cell) = cell else {
            return "  ".to_string();
        };
        let day = format!("{:>2}", cell.date.format("%-d"));
        if cell.selected {
            day.black().on_green().to_string()
        } else if cell.in_range {
            day.green().to_string()
        } else if !cell.selectable {
            day.dimmed().to_string()
        } else if cell.today {
            day.underline().to_string()
        } else {
            day
        }
    }

    fn tags(tags: &[String]) -> String {
        tags.iter().map(|t| format!(" #{}", t)).collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, result: &RecommendationResult) -> String {
        Self::format_results(result)
    }

    fn format_details(&self, details: &PlaceDetails, bookmarked: bool) -> String {
        Self::format_details(details, bookmarked)
    }

    fn format_bookmarks(&self, places: &[Place]) -> String {
        Self::format_bookmarks(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmate_domain::{Answers, Category, EstimatedCost, PlaceId};

    fn plain() {
        colored::control::set_override(false);
    }

    fn place(id: u64, name: &str, rating: f64) -> Place {
        Place {
            id: PlaceId::new(id),
            name: name.to_string(),
            description: "설명".to_string(),
            image: String::new(),
            rating,
            category: Category::Culture,
            tags: vec!["역사".to_string(), "전통".to_string()],
            address: "서울".to_string(),
            estimated_cost: EstimatedCost::new("무료"),
            duration: "1-2시간".to_string(),
        }
    }

    #[test]
    fn test_results_show_medals_in_order() {
        plain();
        let result = RecommendationResult {
            places: vec![place(1, "경복궁", 4.5), place(4, "북촌한옥마을", 4.4)],
            user_answers: Answers::new(),
            location: "서울".to_string(),
            generated_at: chrono::Utc::now(),
            message: "찾았어요".to_string(),
        };

        let out = ConsoleFormatter::format_results(&result);

        let gold = out.find("🥇 최고 추천  경복궁").unwrap();
        let silver = out.find("🥈 추천  북촌한옥마을").unwrap();
        assert!(gold < silver);
        assert!(out.contains("#역사 #전통"));
        assert!(out.contains("tripmate place 4"));
    }

    #[test]
    fn test_empty_results_notice() {
        plain();
        let result = RecommendationResult {
            places: Vec::new(),
            user_answers: Answers::new(),
            location: String::new(),
            generated_at: chrono::Utc::now(),
            message: String::new(),
        };
        assert!(ConsoleFormatter::format_results(&result).contains("불러올 수 없어요"));
    }

    #[test]
    fn test_details_placeholder() {
        plain();
        let details = PlaceDetails::placeholder(PlaceId::new(99));
        let out = ConsoleFormatter::format_details(&details, false);
        assert!(out.contains("정보 준비 중 🤍"));
        assert!(out.contains("(0개 리뷰)"));
        assert!(!out.contains("편의시설"));
    }

    #[test]
    fn test_question_lists_numbered_options() {
        plain();
        let engine = QuestionnaireEngine::default();
        let out = ConsoleFormatter::format_question(&engine);
        assert!(out.contains("어떤 여행을 선호하시나요?"));
        assert!(out.contains("[1/5]"));
        assert!(out.contains("2. 🏛️ 문화/역사"));
    }

    #[test]
    fn test_calendar_range_summary() {
        plain();
        let month = CalendarMonth::new(2024, 3).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let selection = DateSelection {
            start_date: Some(start),
            end_date: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let out = ConsoleFormatter::format_calendar(month, selection, TripLength::MultiDay, today);

        assert!(out.contains("2024년 3월"));
        assert!(out.contains("시작일: 2024년 3월 8일 (금)"));
        assert!(!out.contains("종료일"));
        let single = ConsoleFormatter::format_calendar(month, selection, TripLength::SingleDay, today);
        assert!(!single.contains("시작일"));
    }
}
