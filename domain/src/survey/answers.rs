//! Answer map value object

use super::question::{BUDGET, DURATION, TRAVEL_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers keyed by question id
///
/// Serializes as a flat JSON object (`{"travelType": "culture", ...}`),
/// which is the shape the recommendation endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn remove(&mut self, question_id: &str) -> Option<String> {
        self.0.remove(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn travel_type(&self) -> Option<&str> {
        self.get(TRAVEL_TYPE)
    }

    pub fn budget(&self) -> Option<&str> {
        self.get(BUDGET)
    }

    pub fn duration(&self) -> Option<&str> {
        self.get(DURATION)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat() {
        let answers: Answers = [("travelType", "culture"), ("budget", "low")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"budget":"low","travelType":"culture"}"#);
    }

    #[test]
    fn test_typed_accessors() {
        let mut answers = Answers::new();
        assert!(answers.travel_type().is_none());
        answers.insert("duration", "day");
        assert_eq!(answers.duration(), Some("day"));
        assert_eq!(answers.remove("duration").as_deref(), Some("day"));
        assert!(answers.is_empty());
    }
}
