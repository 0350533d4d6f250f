//! Recommendation request and result value objects

use crate::place::Place;
use crate::survey::Answers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message attached to locally matched results
pub const LOCAL_MATCH_MESSAGE: &str = "당신의 취향에 맞는 여행지를 찾았어요!";

/// Body of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub answers: Answers,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl RecommendationRequest {
    pub fn new(answers: Answers, location: impl Into<String>) -> Self {
        Self {
            answers,
            location: location.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ranked places produced for one completed survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub places: Vec<Place>,
    #[serde(default)]
    pub user_answers: Answers,
    #[serde(default)]
    pub location: String,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
}

impl RecommendationResult {
    /// Wrap places matched on this machine for `request`
    pub fn local(places: Vec<Place>, request: &RecommendationRequest) -> Self {
        Self {
            places,
            user_answers: request.answers.clone(),
            location: request.location.clone(),
            generated_at: Utc::now(),
            message: LOCAL_MATCH_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
