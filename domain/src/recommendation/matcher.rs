//! Filter, rank and backfill matching of answers against a place catalog.
//!
//! ```text
//! catalog ──category──> ──budget(low only)──> rank by rating ──> take N
//!                                                                  │ short?
//! catalog ──────────────── rank by rating, minus picked ──> fill ──┘
//! ```
//!
//! The result holds exactly `min(N, catalog size)` places with no repeated
//! id, filtered picks first and backfill after.

use crate::place::{Place, PlaceId};
use crate::survey::Answers;
use std::collections::HashSet;

/// Number of places a recommendation holds by default
pub const DEFAULT_TARGET_COUNT: usize = 3;

/// Parsed costs below this pass the low-budget filter
pub const LOW_BUDGET_THRESHOLD: u64 = 10_000;

/// Tag that lets any place through for adventure travellers
pub const THRILL_TAG: &str = "스릴";

const ADVENTURE: &str = "adventure";
const LOW_BUDGET: &str = "low";

/// Deterministic place matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationMatcher {
    target_count: usize,
}

impl RecommendationMatcher {
    pub fn new(target_count: usize) -> Self {
        Self { target_count }
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Pick up to `target_count` places for `answers`
    ///
    /// Only the `low` budget tier filters by cost; `medium` and `high` keep
    /// every place.
    pub fn recommend(&self, answers: &Answers, catalog: &[Place]) -> Vec<Place> {
        let filtered: Vec<&Place> = catalog
            .iter()
            .filter(|p| Self::matches_travel_type(p, answers.travel_type()))
            .filter(|p| Self::fits_budget(p, answers.budget()))
            .collect();

        let mut picked: HashSet<PlaceId> = HashSet::new();
        let mut result: Vec<Place> = Vec::with_capacity(self.target_count);

        for place in rank_by_rating(filtered) {
            if result.len() == self.target_count {
                break;
            }
            if picked.insert(place.id) {
                result.push(place.clone());
            }
        }

        if result.len() < self.target_count {
            for place in rank_by_rating(catalog.iter().collect()) {
                if result.len() == self.target_count {
                    break;
                }
                if picked.insert(place.id) {
                    result.push(place.clone());
                }
            }
        }

        result
    }

    fn matches_travel_type(place: &Place, travel_type: Option<&str>) -> bool {
        match travel_type {
            None => true,
            Some(travel_type) => {
                place.category.as_str() == travel_type
                    || (travel_type == ADVENTURE && place.has_tag(THRILL_TAG))
            }
        }
    }

    fn fits_budget(place: &Place, budget: Option<&str>) -> bool {
        if budget != Some(LOW_BUDGET) {
            return true;
        }
        place.estimated_cost.is_free()
            || place
                .estimated_cost
                .amount()
                .is_some_and(|amount| amount < LOW_BUDGET_THRESHOLD)
    }
}

impl Default for RecommendationMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_COUNT)
    }
}

/// Best rating first; equal ratings keep catalog order
fn rank_by_rating(mut places: Vec<&Place>) -> Vec<&Place> {
    places.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::{Category, EstimatedCost};

    fn place(id: u64, name: &str, rating: f64, category: Category, tags: &[&str], cost: &str) -> Place {
        Place {
            id: PlaceId::new(id),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            rating,
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            address: String::new(),
            estimated_cost: EstimatedCost::new(cost),
            duration: String::new(),
        }
    }

    fn sample_catalog() -> Vec<Place> {
        vec![
            place(1, "경복궁", 4.5, Category::Culture, &["역사", "전통"], "성인 3,000원"),
            place(2, "남산서울타워", 4.3, Category::Urban, &["전망", "야경"], "성인 16,000원"),
            place(3, "한강공원", 4.2, Category::Nature, &["자연", "피크닉"], "무료"),
            place(4, "북촌한옥마을", 4.4, Category::Culture, &["한옥", "전통"], "무료"),
            place(5, "롯데월드타워", 4.6, Category::Urban, &["전망", "스릴"], "성인 29,000원"),
            place(6, "청계천", 4.0, Category::Nature, &["산책", "야경"], "무료"),
        ]
    }

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs.iter().copied().collect()
    }

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_culture_low_budget_backfills_best_rated() {
        let result = RecommendationMatcher::default().recommend(
            &answers(&[("travelType", "culture"), ("budget", "low")]),
            &sample_catalog(),
        );
        assert_eq!(names(&result), vec!["경복궁", "북촌한옥마을", "롯데월드타워"]);
    }

    #[test]
    fn test_adventure_takes_thrill_tag() {
        let result = RecommendationMatcher::default().recommend(
            &answers(&[("travelType", "adventure"), ("budget", "high")]),
            &sample_catalog(),
        );
        // Only the thrill-tagged tower survives the filter; the rest is backfill
        assert_eq!(names(&result), vec!["롯데월드타워", "경복궁", "북촌한옥마을"]);
    }

    #[test]
    fn test_adventure_low_budget_filters_everything() {
        let result = RecommendationMatcher::default().recommend(
            &answers(&[("travelType", "adventure"), ("budget", "low")]),
            &sample_catalog(),
        );
        assert_eq!(names(&result), vec!["롯데월드타워", "경복궁", "북촌한옥마을"]);
    }

    #[test]
    fn test_medium_budget_does_not_filter() {
        let result = RecommendationMatcher::default().recommend(
            &answers(&[("travelType", "urban"), ("budget", "medium")]),
            &sample_catalog(),
        );
        assert_eq!(names(&result), vec!["롯데월드타워", "남산서울타워", "경복궁"]);
    }

    #[test]
    fn test_low_budget_keeps_free_and_cheap() {
        let result = RecommendationMatcher::default().recommend(
            &answers(&[("travelType", "nature"), ("budget", "low")]),
            &sample_catalog(),
        );
        assert_eq!(names(&result), vec!["한강공원", "청계천", "롯데월드타워"]);
    }

    #[test]
    fn test_no_travel_type_ranks_whole_catalog() {
        let result = RecommendationMatcher::default().recommend(&Answers::new(), &sample_catalog());
        assert_eq!(names(&result), vec!["롯데월드타워", "경복궁", "북촌한옥마을"]);
    }

    #[test]
    fn test_equal_ratings_keep_catalog_order() {
        let catalog = vec![
            place(10, "a", 4.0, Category::Nature, &[], "무료"),
            place(11, "b", 4.0, Category::Nature, &[], "무료"),
            place(12, "c", 4.0, Category::Nature, &[], "무료"),
        ];
        let result = RecommendationMatcher::new(2)
            .recommend(&answers(&[("travelType", "nature")]), &catalog);
        assert_eq!(names(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_result_size_and_uniqueness() {
        let catalog = sample_catalog();
        for target in 0..=8 {
            let result = RecommendationMatcher::new(target).recommend(
                &answers(&[("travelType", "culture"), ("budget", "low")]),
                &catalog,
            );
            assert_eq!(result.len(), target.min(catalog.len()));
            let ids: HashSet<_> = result.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), result.len());
        }
    }

    #[test]
    fn test_duplicate_catalog_ids_are_emitted_once() {
        let mut catalog = sample_catalog();
        catalog.push(catalog[4].clone());
        let result = RecommendationMatcher::default().recommend(&Answers::new(), &catalog);
        assert_eq!(names(&result), vec!["롯데월드타워", "경복궁", "북촌한옥마을"]);
    }

    #[test]
    fn test_deterministic() {
        let catalog = sample_catalog();
        let input = answers(&[("travelType", "urban"), ("budget", "low")]);
        let matcher = RecommendationMatcher::default();
        let first = serde_json::to_string(&matcher.recommend(&input, &catalog)).unwrap();
        for _ in 0..10 {
            assert_eq!(
                serde_json::to_string(&matcher.recommend(&input, &catalog)).unwrap(),
                first
            );
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert!(RecommendationMatcher::default()
            .recommend(&Answers::new(), &[])
            .is_empty());
    }
}
