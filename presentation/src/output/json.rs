//! JSON output for scripting

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use serde_json::json;
use tripmate_domain::{Place, PlaceDetails, RecommendationResult};

/// Pretty-printed JSON, one document per command
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, result: &RecommendationResult) -> String {
        Self::to_json(result)
    }

    fn format_details(&self, details: &PlaceDetails, bookmarked: bool) -> String {
        let mut value = serde_json::to_value(details).unwrap_or_else(|_| json!({}));
        if let Some(map) = value.as_object_mut() {
            map.insert("bookmarked".to_string(), json!(bookmarked));
        }
        Self::to_json(&value)
    }

    fn format_bookmarks(&self, places: &[Place]) -> String {
        Self::to_json(places)
    }
}
