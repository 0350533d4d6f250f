//! Bookmarked places

use super::entities::PlaceId;
use serde::{Deserialize, Serialize};

/// Bookmarked place ids in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks(Vec<PlaceId>);

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        self.0.contains(&id)
    }

    /// Add or remove `id`; returns whether it is bookmarked afterwards
    pub fn toggle(&mut self, id: PlaceId) -> bool {
        if self.contains(id) {
            self.0.retain(|b| *b != id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[PlaceId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
