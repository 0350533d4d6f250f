//! Place details use case and loader
//!
//! [`PlaceDetailsUseCase`] always produces a record: the remote service is
//! asked first, then the bundled catalog, then a placeholder is made up.
//!
//! [`PlaceDetailsLoader`] sits in front of it for views that switch places
//! quickly. Only the most recent request may deliver a result; anything
//! still in flight when a newer one starts resolves to `None`.

use crate::ports::place_catalog::{LocalCatalog, PlaceCatalogGateway};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tripmate_domain::{PlaceDetails, PlaceId};

/// Use case for fetching one place's details
pub struct PlaceDetailsUseCase<G: PlaceCatalogGateway + 'static> {
    gateway: Arc<G>,
    catalog: Arc<dyn LocalCatalog>,
}

impl<G: PlaceCatalogGateway + 'static> PlaceDetailsUseCase<G> {
    pub fn new(gateway: Arc<G>, catalog: Arc<dyn LocalCatalog>) -> Self {
        Self { gateway, catalog }
    }

    pub async fn execute(&self, id: PlaceId) -> PlaceDetails {
        match self.gateway.place_details(id).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Place details request for {} failed: {}", id, e);
                self.catalog.details(id).unwrap_or_else(|| {
                    debug!("No local details for {}, using placeholder", id);
                    PlaceDetails::placeholder(id)
                })
            }
        }
    }
}

/// Request currently allowed to deliver a result
struct InFlight {
    id: PlaceId,
    generation: u64,
    token: CancellationToken,
}

/// Latest-request-wins front for [`PlaceDetailsUseCase`]
pub struct PlaceDetailsLoader<G: PlaceCatalogGateway + 'static> {
    use_case: PlaceDetailsUseCase<G>,
    current: Mutex<Option<InFlight>>,
    next_generation: AtomicU64,
}

impl<G: PlaceCatalogGateway + 'static> PlaceDetailsLoader<G> {
    pub fn new(use_case: PlaceDetailsUseCase<G>) -> Self {
        Self {
            use_case,
            current: Mutex::new(None),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Place whose request is in flight, if any
    pub fn current(&self) -> Option<PlaceId> {
        self.lock_current().as_ref().map(|in_flight| in_flight.id)
    }

    /// Fetch details for `id`, superseding any earlier request
    ///
    /// Returns `None` when a later call to `load` (or [`cancel`](Self::cancel))
    /// happened before this one finished.
    pub async fn load(&self, id: PlaceId) -> Option<PlaceDetails> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        let previous = self.lock_current().replace(InFlight {
            id,
            generation,
            token: token.clone(),
        });
        if let Some(stale) = previous {
            debug!("Superseding details request for {}", stale.id);
            stale.token.cancel();
        }

        let details = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            details = self.use_case.execute(id) => Some(details),
        };

        let mut current = self.lock_current();
        if token.is_cancelled() {
            return None;
        }
        if current
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == generation)
        {
            *current = None;
        }
        details
    }

    /// Drop the in-flight request, if any
    pub fn cancel(&self) {
        if let Some(in_flight) = self.lock_current().take() {
            in_flight.token.cancel();
        }
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<InFlight>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::place_catalog::GatewayError;
    use crate::use_cases::test_support::{MockGateway, TestCatalog};
    use std::time::Duration;
    use tripmate_domain::Category;

    fn use_case(gateway: MockGateway) -> PlaceDetailsUseCase<MockGateway> {
        PlaceDetailsUseCase::new(Arc::new(gateway), TestCatalog::shared())
    }

    #[tokio::test]
    async fn test_remote_details() {
        let gateway = MockGateway::failing();
        let mut remote = TestCatalog::details_for(5);
        remote.review_count = 999;
        gateway.push_details(Duration::ZERO, Ok(remote.clone()));

        let details = use_case(gateway).execute(PlaceId::new(5)).await;
        assert_eq!(details, remote);
    }

    #[tokio::test]
    async fn test_falls_back_to_local_details() {
        let gateway = MockGateway::failing();
        gateway.push_details(Duration::ZERO, Err(GatewayError::HttpStatus(500)));

        let details = use_case(gateway).execute(PlaceId::new(1)).await;
        assert_eq!(details.place.name, "경복궁");
        assert!(!details.is_placeholder());
    }

    #[tokio::test]
    async fn test_unknown_id_gets_placeholder() {
        let details = use_case(MockGateway::failing())
            .execute(PlaceId::new(42))
            .await;
        assert!(details.is_placeholder());
        assert_eq!(details.place.id, PlaceId::new(42));
        assert_eq!(details.place.category, Category::Other);
        assert_eq!(details.place.rating, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let gateway = MockGateway::failing();
        gateway.push_details(Duration::from_millis(100), Ok(TestCatalog::details_for(1)));
        gateway.push_details(Duration::from_millis(10), Ok(TestCatalog::details_for(2)));
        let loader = PlaceDetailsLoader::new(use_case(gateway));

        let (first, second) = tokio::join!(
            loader.load(PlaceId::new(1)),
            loader.load(PlaceId::new(2))
        );

        assert!(first.is_none());
        assert_eq!(second.unwrap().place.name, "남산서울타워");
        assert_eq!(loader.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_latest_request_still_wins() {
        let gateway = MockGateway::failing();
        gateway.push_details(Duration::from_millis(10), Ok(TestCatalog::details_for(1)));
        gateway.push_details(Duration::from_millis(100), Ok(TestCatalog::details_for(2)));
        let loader = PlaceDetailsLoader::new(use_case(gateway));

        let (first, second) = tokio::join!(
            loader.load(PlaceId::new(1)),
            loader.load(PlaceId::new(2))
        );

        assert!(first.is_none());
        assert_eq!(second.unwrap().place.id, PlaceId::new(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_in_flight() {
        let gateway = MockGateway::failing();
        gateway.push_details(Duration::from_millis(50), Ok(TestCatalog::details_for(1)));
        let loader = PlaceDetailsLoader::new(use_case(gateway));

        let (details, ()) = tokio::join!(loader.load(PlaceId::new(1)), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            loader.cancel();
        });

        assert!(details.is_none());
        assert_eq!(loader.current(), None);
    }

    #[tokio::test]
    async fn test_sequential_loads_both_deliver() {
        let loader = PlaceDetailsLoader::new(use_case(MockGateway::failing()));
        assert!(loader.load(PlaceId::new(1)).await.is_some());
        assert!(loader.load(PlaceId::new(2)).await.is_some());
    }
}
