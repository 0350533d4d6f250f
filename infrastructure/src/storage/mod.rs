//! Key-value store adapters
//!
//! Provides [`JsonFileStore`], a single JSON file implementing the
//! [`KeyValueStore`](tripmate_application::KeyValueStore) port.

mod json_file_store;

pub use json_file_store::JsonFileStore;
