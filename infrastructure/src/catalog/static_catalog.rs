//! Bundled place catalog
//!
//! Backs every remote call while the catalog service is unreachable. The
//! Seoul data set ships inside the binary.

use serde::Deserialize;
use std::collections::HashMap;
use tripmate_application::LocalCatalog;
use tripmate_domain::{Place, PlaceDetails, PlaceId};

const SEOUL_CATALOG: &str = include_str!("../../data/seoul_catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    places: Vec<Place>,
    #[serde(default)]
    details: Vec<PlaceDetails>,
}

/// In-memory catalog with an optional detail record per place
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    places: Vec<Place>,
    details: HashMap<PlaceId, PlaceDetails>,
}

impl StaticCatalog {
    /// The six Seoul sample places
    pub fn seoul() -> Result<Self, serde_json::Error> {
        Self::from_json(SEOUL_CATALOG)
    }

    /// Parse a `{"places": [...], "details": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.places, file.details))
    }

    pub fn new(places: Vec<Place>, details: Vec<PlaceDetails>) -> Self {
        Self {
            places,
            details: details.into_iter().map(|d| (d.place.id, d)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl LocalCatalog for StaticCatalog {
    fn places(&self) -> &[Place] {
        &self.places
    }

    fn details(&self, id: PlaceId) -> Option<PlaceDetails> {
        self.details.get(&id).cloned()
    }
}
