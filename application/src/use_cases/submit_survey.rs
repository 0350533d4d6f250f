//! Submit Survey use case
//!
//! Turns a finished survey into recommendations and stores them for the
//! results view. The remote service is asked first; any failure falls back
//! to matching the bundled catalog locally.

use crate::config::SurveyParams;
use crate::ports::key_value_store::{
    KeyValueStore, KeyValueStoreExt, RECOMMENDATIONS_KEY, USER_LOCATION_KEY,
};
use crate::ports::place_catalog::{LocalCatalog, PlaceCatalogGateway};
use crate::ports::progress::{NoProgress, ResultSource, SubmissionProgress};
use crate::ports::survey_logger::{NoSurveyLogger, SurveyEvent, SurveyLogger};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tripmate_domain::{
    Answers, DomainError, QuestionnaireEngine, RecommendationMatcher, RecommendationRequest,
    RecommendationResult,
};

/// Input for the SubmitSurvey use case
#[derive(Debug, Clone)]
pub struct SubmitSurveyInput {
    pub answers: Answers,
    /// Overrides the stored location
    pub location: Option<String>,
}

impl SubmitSurveyInput {
    pub fn new(answers: Answers) -> Self {
        Self {
            answers,
            location: None,
        }
    }

    /// Take the answers of a completed survey
    pub fn from_engine(engine: &QuestionnaireEngine) -> Result<Self, DomainError> {
        engine.finalize().map(Self::new)
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Output of the SubmitSurvey use case
#[derive(Debug, Clone)]
pub struct SubmitSurveyOutput {
    pub result: RecommendationResult,
    pub source: ResultSource,
    /// Whether the result reached the store
    pub persisted: bool,
}

/// Use case for submitting a completed survey
pub struct SubmitSurveyUseCase<G: PlaceCatalogGateway + 'static, S: KeyValueStore + 'static> {
    gateway: Arc<G>,
    store: Arc<S>,
    catalog: Arc<dyn LocalCatalog>,
    logger: Arc<dyn SurveyLogger>,
    params: SurveyParams,
}

impl<G: PlaceCatalogGateway + 'static, S: KeyValueStore + 'static> SubmitSurveyUseCase<G, S> {
    pub fn new(gateway: Arc<G>, store: Arc<S>, catalog: Arc<dyn LocalCatalog>) -> Self {
        Self {
            gateway,
            store,
            catalog,
            logger: Arc::new(NoSurveyLogger),
            params: SurveyParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn SurveyLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: SurveyParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SubmitSurveyInput) -> SubmitSurveyOutput {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Never fails: transport errors fall back to local matching and a store
    /// failure only clears `persisted`.
    pub async fn execute_with_progress(
        &self,
        input: SubmitSurveyInput,
        progress: &dyn SubmissionProgress,
    ) -> SubmitSurveyOutput {
        let location = input.location.unwrap_or_else(|| self.stored_location());
        let request = RecommendationRequest::new(input.answers, location);

        info!("Submitting survey ({} answers)", request.answers.len());
        progress.on_request_start(&request.location);

        let (result, source) = match self.gateway.recommend(&request).await {
            Ok(mut result) => {
                debug!("Remote service returned {} places", result.places.len());
                if result.places.len() > self.params.target_count {
                    debug!("Keeping the first {} places", self.params.target_count);
                    result.places.truncate(self.params.target_count);
                }
                (result, ResultSource::Remote)
            }
            Err(e) => {
                warn!("Recommendation request failed, matching locally: {}", e);
                progress.on_fallback(&e.to_string());
                self.logger.log(SurveyEvent::new(
                    "fallback",
                    json!({ "endpoint": "recommendations", "error": e.to_string() }),
                ));
                let matcher = RecommendationMatcher::new(self.params.target_count);
                let places = matcher.recommend(&request.answers, self.catalog.places());
                (RecommendationResult::local(places, &request), ResultSource::LocalFallback)
            }
        };

        let persisted = match self.store.set_json(RECOMMENDATIONS_KEY, &result) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not store recommendations: {}", e);
                false
            }
        };

        self.logger.log(SurveyEvent::new(
            "submission",
            json!({
                "answers": request.answers,
                "location": request.location,
                "source": source.as_str(),
                "places": result.places.iter().map(|p| p.id).collect::<Vec<_>>(),
            }),
        ));
        progress.on_complete(&result, source);

        SubmitSurveyOutput {
            result,
            source,
            persisted,
        }
    }

    fn stored_location(&self) -> String {
        match self.store.get(USER_LOCATION_KEY) {
            Ok(Some(location)) if !location.trim().is_empty() => location,
            Ok(_) => self.params.default_location.clone(),
            Err(e) => {
                warn!("Could not read stored location: {}", e);
                self.params.default_location.clone()
            }
        }
    }
}
