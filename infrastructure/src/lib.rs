//! Infrastructure layer for tripmate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use catalog::{HttpPlaceCatalog, StaticCatalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileStorageConfig, FileSurveyConfig,
};
pub use logging::JsonlSurveyLogger;
pub use storage::JsonFileStore;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tripmate_application::{
        LoadRecommendationsUseCase, LocalCatalog, ResultSource, SubmitSurveyInput,
        SubmitSurveyUseCase,
    };
    use tripmate_domain::Answers;

    #[tokio::test]
    async fn test_offline_submission_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let gateway = Arc::new(
            HttpPlaceCatalog::new("http://127.0.0.1:9/api", Duration::from_secs(1))
                .unwrap()
                .with_enabled(false),
        );
        let catalog: Arc<dyn LocalCatalog> = Arc::new(StaticCatalog::seoul().unwrap());
        let use_case =
            SubmitSurveyUseCase::new(gateway, Arc::new(JsonFileStore::open(&path)), catalog);

        let answers: Answers = [("travelType", "culture"), ("budget", "low")]
            .into_iter()
            .collect();
        let output = use_case.execute(SubmitSurveyInput::new(answers)).await;

        assert_eq!(output.source, ResultSource::LocalFallback);
        let names: Vec<_> = output.result.places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["경복궁", "북촌한옥마을", "롯데월드타워"]);

        let reopened = Arc::new(JsonFileStore::open(&path));
        let loaded = LoadRecommendationsUseCase::new(reopened).execute();
        assert_eq!(loaded, Some(output.result));
    }
}
