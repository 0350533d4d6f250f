//! Persisted key-value store port
//!
//! A small string-to-string store shared by the survey, the results view and
//! the place detail view. Writes are last-write-wins per key; nothing spans
//! more than one key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

/// Serialized [`RecommendationResult`](tripmate_domain::RecommendationResult) of the last survey
pub const RECOMMENDATIONS_KEY: &str = "recommendations";
/// JSON array of bookmarked place ids
pub const BOOKMARKS_KEY: &str = "bookmarks";
/// Plain-text location sent with recommendation requests
pub const USER_LOCATION_KEY: &str = "userLocation";

/// Errors raised by a store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(String),

    #[error("Could not encode value for '{key}': {reason}")]
    Encode { key: String, reason: String },
}

/// Persisted key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed JSON access on top of any [`KeyValueStore`]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and decode `key`
    ///
    /// Missing keys, unreadable stores and malformed JSON all read as `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read '{}': {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed '{}' entry: {}", key, e);
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Volatile store; nothing survives the process
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
