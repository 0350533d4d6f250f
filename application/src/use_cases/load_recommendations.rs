//! Load Recommendations use case
//!
//! Reads the result stored by the last survey submission.

use crate::ports::key_value_store::{KeyValueStore, KeyValueStoreExt, RECOMMENDATIONS_KEY};
use std::sync::Arc;
use tracing::debug;
use tripmate_domain::RecommendationResult;

/// Use case for reading the stored recommendation result
pub struct LoadRecommendationsUseCase<S: KeyValueStore + 'static> {
    store: Arc<S>,
}

impl<S: KeyValueStore + 'static> LoadRecommendationsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Absent and unreadable entries both come back as `None`
    pub fn execute(&self) -> Option<RecommendationResult> {
        let result: Option<RecommendationResult> = self.store.get_json(RECOMMENDATIONS_KEY);
        if result.is_none() {
            debug!("No stored recommendations");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::key_value_store::InMemoryStore;

    #[test]
    fn test_missing_entry() {
        let use_case = LoadRecommendationsUseCase::new(Arc::new(InMemoryStore::new()));
        assert!(use_case.execute().is_none());
    }

    #[test]
    fn test_corrupt_entry_reads_as_absent() {
        let store = Arc::new(InMemoryStore::new());
        store.set(RECOMMENDATIONS_KEY, "{\"places\": [").unwrap();
        let use_case = LoadRecommendationsUseCase::new(store);
        assert!(use_case.execute().is_none());
    }

    #[test]
    fn test_stored_entry() {
        let store = Arc::new(InMemoryStore::new());
        store
            .set(
                RECOMMENDATIONS_KEY,
                r#"{"places": [], "location": "서울", "message": "hi"}"#,
            )
            .unwrap();
        let result = LoadRecommendationsUseCase::new(store).execute().unwrap();
        assert_eq!(result.location, "서울");
        assert_eq!(result.message, "hi");
        assert!(result.is_empty());
    }
}
