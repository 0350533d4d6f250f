//! Send Feedback use case

use crate::ports::place_catalog::PlaceCatalogGateway;
use crate::ports::survey_logger::{NoSurveyLogger, SurveyEvent, SurveyLogger};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use tripmate_domain::{DomainError, Feedback, FeedbackReceipt, PlaceId, Rating};

/// Use case for rating a place
///
/// Sent once, never retried. A transport failure is reported through the
/// receipt rather than as an error.
pub struct SendFeedbackUseCase<G: PlaceCatalogGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn SurveyLogger>,
}

impl<G: PlaceCatalogGateway + 'static> SendFeedbackUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoSurveyLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn SurveyLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Rejects ratings outside 1..=5 before anything is sent
    pub async fn execute(
        &self,
        place_id: PlaceId,
        rating: u8,
        comment: &str,
    ) -> Result<FeedbackReceipt, DomainError> {
        let feedback = Feedback::new(place_id, Rating::new(rating)?, comment);

        let receipt = match self.gateway.send_feedback(&feedback).await {
            Ok(receipt) => {
                info!("Feedback for {} sent (success: {})", place_id, receipt.success);
                receipt
            }
            Err(e) => {
                warn!("Feedback for {} could not be sent: {}", place_id, e);
                FeedbackReceipt::failed(e.to_string())
            }
        };

        self.logger.log(SurveyEvent::new(
            "feedback",
            json!({
                "placeId": place_id,
                "rating": rating,
                "success": receipt.success,
            }),
        ));
        Ok(receipt)
    }
}
