//! Application layer for tripmate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LOCATION, SurveyParams};
pub use ports::{
    key_value_store::{
        BOOKMARKS_KEY, InMemoryStore, KeyValueStore, KeyValueStoreExt, RECOMMENDATIONS_KEY,
        StoreError, USER_LOCATION_KEY,
    },
    place_catalog::{GatewayError, LocalCatalog, PlaceCatalogGateway},
    progress::{NoProgress, ResultSource, SubmissionProgress},
    survey_logger::{NoSurveyLogger, SurveyEvent, SurveyLogger},
};
pub use use_cases::bookmarks::{BookmarksUseCase, UserLocationUseCase};
pub use use_cases::feedback::SendFeedbackUseCase;
pub use use_cases::load_recommendations::LoadRecommendationsUseCase;
pub use use_cases::place_details::{PlaceDetailsLoader, PlaceDetailsUseCase};
pub use use_cases::submit_survey::{SubmitSurveyInput, SubmitSurveyOutput, SubmitSurveyUseCase};
pub use use_cases::survey_session::SurveySession;
