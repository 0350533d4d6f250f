//! File-backed key-value store.
//!
//! All entries live in one JSON object of string values. Every operation
//! reads the file afresh, and a write applies its single key to the current
//! document before rewriting it through a temporary file and a rename. Other
//! handles on the same path therefore never lose keys they did not touch.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use tripmate_application::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a JSON object file
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles of this handle
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file reads as empty. An unreadable or malformed file also
    /// reads as empty (with a warning) and is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Opened store {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Entries {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                warn!("Could not read store {}: {}", path.display(), e);
                return Entries::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed store {}: {}", path.display(), e);
            Entries::new()
        })
    }

    fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Encode {
            key: "*".to_string(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(Self::read_entries(&self.path).remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock();
        let mut entries = Self::read_entries(&self.path);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock();
        let mut entries = Self::read_entries(&self.path);
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries)
    }
}
