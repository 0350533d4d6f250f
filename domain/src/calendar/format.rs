//! Korean long-form date formatting
//!
//! Mirrors the `ko-KR` locale output for `{year, month: long, day, weekday: short}`,
//! e.g. `2024년 3월 1일 (금)`.

use chrono::{Datelike, NaiveDate};

/// Separator between the two ends of a formatted range
pub const RANGE_SEPARATOR: &str = " ~ ";

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Short Korean weekday name, Sunday first
pub fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Format a single date
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday_short(date)
    )
}

/// Format an inclusive date range as `<start> ~ <end>`
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{}{}{}", format_date(start), RANGE_SEPARATOR, format_date(end))
}

/// Header label for a calendar month, e.g. `2024년 3월`
pub fn format_month(year: i32, month: u32) -> String {
    format!("{}년 {}월", year, month)
}

/// Column headers for a Sunday-first calendar grid
pub fn weekday_headers() -> [&'static str; 7] {
    WEEKDAYS
}
