//! Output formatter trait

use tripmate_domain::{OutputFormat, Place, PlaceDetails, RecommendationResult};

/// Formats command results for stdout
pub trait OutputFormatter {
    /// Ranked recommendation list
    fn format_results(&self, result: &RecommendationResult) -> String;

    /// Full place record with the user's bookmark state
    fn format_details(&self, details: &PlaceDetails, bookmarked: bool) -> String;

    /// Bookmarked places in bookmark order
    fn format_bookmarks(&self, places: &[Place]) -> String;
}

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
