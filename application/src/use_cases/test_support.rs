//! Shared test doubles for use case tests

use crate::ports::place_catalog::{GatewayError, LocalCatalog, PlaceCatalogGateway};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tripmate_domain::{
    Category, EstimatedCost, Feedback, FeedbackReceipt, Place, PlaceDetails, PlaceId,
    RecommendationRequest, RecommendationResult,
};

/// Gateway whose responses are scripted per call
pub(crate) struct MockGateway {
    recommendation: Option<RecommendationResult>,
    details: Mutex<VecDeque<(Duration, Result<PlaceDetails, GatewayError>)>>,
    feedback: Mutex<VecDeque<Result<FeedbackReceipt, GatewayError>>>,
    recommend_calls: Mutex<usize>,
    last_location: Mutex<Option<String>>,
    sent_feedback: Mutex<Vec<Feedback>>,
}

impl MockGateway {
    /// Every call fails with a connection error
    pub fn failing() -> Self {
        Self {
            recommendation: None,
            details: Mutex::new(VecDeque::new()),
            feedback: Mutex::new(VecDeque::new()),
            recommend_calls: Mutex::new(0),
            last_location: Mutex::new(None),
            sent_feedback: Mutex::new(Vec::new()),
        }
    }

    pub fn with_recommendation(result: RecommendationResult) -> Self {
        Self {
            recommendation: Some(result),
            ..Self::failing()
        }
    }

    /// Queue a details response delivered after `delay`
    pub fn push_details(&self, delay: Duration, response: Result<PlaceDetails, GatewayError>) {
        self.details.lock().unwrap().push_back((delay, response));
    }

    pub fn push_feedback(&self, response: Result<FeedbackReceipt, GatewayError>) {
        self.feedback.lock().unwrap().push_back(response);
    }

    pub fn recommend_calls(&self) -> usize {
        *self.recommend_calls.lock().unwrap()
    }

    pub fn last_location(&self) -> Option<String> {
        self.last_location.lock().unwrap().clone()
    }

    pub fn sent_feedback(&self) -> Vec<Feedback> {
        self.sent_feedback.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceCatalogGateway for MockGateway {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, GatewayError> {
        *self.recommend_calls.lock().unwrap() += 1;
        *self.last_location.lock().unwrap() = Some(request.location.clone());
        self.recommendation
            .clone()
            .ok_or_else(|| GatewayError::ConnectionError("connection refused".to_string()))
    }

    async fn place_details(&self, _id: PlaceId) -> Result<PlaceDetails, GatewayError> {
        let next = self.details.lock().unwrap().pop_front();
        match next {
            Some((delay, response)) => {
                tokio::time::sleep(delay).await;
                response
            }
            None => Err(GatewayError::ConnectionError("connection refused".to_string())),
        }
    }

    async fn send_feedback(&self, feedback: &Feedback) -> Result<FeedbackReceipt, GatewayError> {
        self.sent_feedback.lock().unwrap().push(feedback.clone());
        self.feedback
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::Timeout))
    }
}

/// Small catalog mirroring the bundled Seoul places
pub(crate) struct TestCatalog {
    places: Vec<Place>,
}

fn place(id: u64, name: &str, rating: f64, category: Category, tags: &[&str], cost: &str) -> Place {
    Place {
        id: PlaceId::new(id),
        name: name.to_string(),
        description: format!("{name} 설명"),
        image: String::new(),
        rating,
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        address: "서울".to_string(),
        estimated_cost: EstimatedCost::new(cost),
        duration: "1-2시간".to_string(),
    }
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            places: vec![
                place(1, "경복궁", 4.5, Category::Culture, &["역사", "전통"], "성인 3,000원"),
                place(2, "남산서울타워", 4.3, Category::Urban, &["전망", "야경"], "성인 16,000원"),
                place(3, "한강공원", 4.2, Category::Nature, &["자연", "힐링"], "무료"),
                place(4, "북촌한옥마을", 4.4, Category::Culture, &["한옥", "전통"], "무료"),
                place(5, "롯데월드타워", 4.6, Category::Urban, &["전망", "스릴"], "성인 29,000원"),
                place(6, "청계천", 4.0, Category::Nature, &["산책", "힐링"], "무료"),
            ],
        }
    }

    pub fn shared() -> Arc<dyn LocalCatalog> {
        Arc::new(Self::new())
    }

    /// Detail record built from a catalog entry
    pub fn details_for(id: u64) -> PlaceDetails {
        let place = Self::new()
            .places
            .into_iter()
            .find(|p| p.id.get() == id)
            .unwrap();
        PlaceDetails {
            place,
            review_count: 10,
            opening_hours: "09:00 - 18:00".to_string(),
            contact: "02-000-0000".to_string(),
            facilities: vec!["화장실".to_string()],
            nearby_places: Vec::new(),
        }
    }
}

impl LocalCatalog for TestCatalog {
    fn places(&self) -> &[Place] {
        &self.places
    }

    fn details(&self, id: PlaceId) -> Option<PlaceDetails> {
        (id.get() <= 2).then(|| Self::details_for(id.get()))
    }
}
