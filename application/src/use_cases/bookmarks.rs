//! Bookmark and location use cases
//!
//! Thin wrappers over the key-value store for the per-user preferences the
//! result and detail views read.

use crate::config::DEFAULT_LOCATION;
use crate::ports::key_value_store::{
    BOOKMARKS_KEY, KeyValueStore, KeyValueStoreExt, StoreError, USER_LOCATION_KEY,
};
use std::sync::Arc;
use tracing::info;
use tripmate_domain::{Bookmarks, PlaceId};

/// Use case for reading and toggling bookmarks
pub struct BookmarksUseCase<S: KeyValueStore + 'static> {
    store: Arc<S>,
}

impl<S: KeyValueStore + 'static> BookmarksUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stored bookmarks; a missing or corrupt entry reads as empty
    pub fn list(&self) -> Bookmarks {
        self.store.get_json(BOOKMARKS_KEY).unwrap_or_default()
    }

    pub fn is_bookmarked(&self, id: PlaceId) -> bool {
        self.list().contains(id)
    }

    /// Flip the bookmark for `id`; returns whether it is now bookmarked
    pub fn toggle(&self, id: PlaceId) -> Result<bool, StoreError> {
        let mut bookmarks = self.list();
        let bookmarked = bookmarks.toggle(id);
        self.store.set_json(BOOKMARKS_KEY, &bookmarks)?;
        info!(
            "{} {} ({} bookmarks)",
            if bookmarked { "Bookmarked" } else { "Unbookmarked" },
            id,
            bookmarks.len()
        );
        Ok(bookmarked)
    }
}

/// Use case for the location sent with recommendation requests
pub struct UserLocationUseCase<S: KeyValueStore + 'static> {
    store: Arc<S>,
    default_location: String,
}

impl<S: KeyValueStore + 'static> UserLocationUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Stored location, or the default when none is set
    pub fn get(&self) -> Result<String, StoreError> {
        Ok(self
            .store
            .get(USER_LOCATION_KEY)?
            .filter(|location| !location.trim().is_empty())
            .unwrap_or_else(|| self.default_location.clone()))
    }

    pub fn set(&self, location: &str) -> Result<(), StoreError> {
        self.store.set(USER_LOCATION_KEY, location.trim())
    }
}
