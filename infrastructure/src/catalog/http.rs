//! HTTP adapter for the remote catalog service
//!
//! Plain JSON over HTTP with no retries. Every failure maps to a
//! [`GatewayError`]; recovering from it is the caller's job.

use crate::config::FileApiConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use tripmate_application::{GatewayError, PlaceCatalogGateway};
use tripmate_domain::{
    Feedback, FeedbackReceipt, PlaceDetails, PlaceId, RecommendationRequest,
    RecommendationResult,
};

const USER_AGENT: &str = concat!("tripmate/", env!("CARGO_PKG_VERSION"));

/// Catalog service client
pub struct HttpPlaceCatalog {
    client: Client,
    base_url: String,
    enabled: bool,
}

impl HttpPlaceCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            enabled: true,
        })
    }

    /// Client built from the `[api]` config section
    pub fn from_config(config: &FileApiConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))?
            .with_enabled(config.enabled))
    }

    /// A disabled client fails every call with [`GatewayError::Disabled`]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn ensure_enabled(&self) -> Result<(), GatewayError> {
        if self.enabled {
            Ok(())
        } else {
            Err(GatewayError::Disabled)
        }
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::HttpStatus(status.as_u16()));
    }
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl PlaceCatalogGateway for HttpPlaceCatalog {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, GatewayError> {
        self.ensure_enabled()?;
        let url = self.url("recommendations");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn place_details(&self, id: PlaceId) -> Result<PlaceDetails, GatewayError> {
        self.ensure_enabled()?;
        let url = self.url(&format!("places/{}", id));
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn send_feedback(&self, feedback: &Feedback) -> Result<FeedbackReceipt, GatewayError> {
        self.ensure_enabled()?;
        let url = self.url("feedback");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(feedback)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}
