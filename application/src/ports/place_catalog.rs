//! Place catalog ports
//!
//! Defines the interface to the remote catalog service and to the catalog
//! bundled with the application, which backs every remote call when the
//! service cannot be reached.

use async_trait::async_trait;
use thiserror::Error;
use tripmate_domain::{
    Feedback, FeedbackReceipt, Place, PlaceDetails, PlaceId, RecommendationRequest,
    RecommendationResult,
};

/// Errors that can occur while talking to the catalog service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Remote catalog disabled")]
    Disabled,
}

/// Remote catalog service
///
/// Implementations (adapters) live in the infrastructure layer. Callers
/// recover from every error with local data, so adapters should not retry.
#[async_trait]
pub trait PlaceCatalogGateway: Send + Sync {
    /// `POST /recommendations`
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, GatewayError>;

    /// `GET /places/{id}`
    async fn place_details(&self, id: PlaceId) -> Result<PlaceDetails, GatewayError>;

    /// `POST /feedback`
    async fn send_feedback(&self, feedback: &Feedback) -> Result<FeedbackReceipt, GatewayError>;
}

/// Catalog shipped with the application
pub trait LocalCatalog: Send + Sync {
    /// Every place, in catalog order
    fn places(&self) -> &[Place];

    /// Detail record for `id`, if the catalog has one
    fn details(&self, id: PlaceId) -> Option<PlaceDetails>;
}
