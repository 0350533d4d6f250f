//! Place entities

use super::cost::EstimatedCost;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catalog identifier of a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(u64);

impl PlaceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for PlaceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Travel style a place belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Culture,
    Nature,
    Urban,
    Adventure,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Culture => "culture",
            Category::Nature => "nature",
            Category::Urban => "urban",
            Category::Adventure => "adventure",
            Category::Other => "other",
        }
    }

    /// Display label with icon
    pub fn label(&self) -> &'static str {
        match self {
            Category::Culture => "🏛️ 문화/역사",
            Category::Nature => "🌿 자연/힐링",
            Category::Urban => "🏙️ 도시/쇼핑",
            Category::Adventure => "🏔️ 모험/액티비티",
            Category::Other => "기타",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog place as returned in recommendation lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// 0.0 to 5.0
    #[serde(default)]
    pub rating: f64,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub estimated_cost: EstimatedCost,
    #[serde(default)]
    pub duration: String,
}

impl Place {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whole stars for display (rating floored, clamped to 0..=5)
    pub fn stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }
}

/// Full record shown on the place detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub nearby_places: Vec<String>,
}

/// Text used for every field of a placeholder record
pub const PENDING_TEXT: &str = "정보 준비 중";

impl PlaceDetails {
    /// Stand-in record for an id nobody knows about
    pub fn placeholder(id: PlaceId) -> Self {
        Self {
            place: Place {
                id,
                name: PENDING_TEXT.to_string(),
                description: "상세 정보를 준비하고 있습니다.".to_string(),
                image: "https://placehold.co/300x200/cccccc/ffffff?text=준비중".to_string(),
                rating: 0.0,
                category: Category::Other,
                tags: Vec::new(),
                address: PENDING_TEXT.to_string(),
                estimated_cost: EstimatedCost::new(PENDING_TEXT),
                duration: PENDING_TEXT.to_string(),
            },
            review_count: 0,
            opening_hours: PENDING_TEXT.to_string(),
            contact: PENDING_TEXT.to_string(),
            facilities: Vec::new(),
            nearby_places: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.place.name == PENDING_TEXT && self.place.rating == 0.0
    }
}
