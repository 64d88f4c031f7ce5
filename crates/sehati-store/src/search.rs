//! Saved searches, favourite hospitals and the last known location.
//!
//! The whole log serialises to one JSON document (`SearchData`) so a caller
//! can persist it under a single key and restore it with `SearchLog::restore`.
//! A document that fails to parse restores as an empty log.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    history::{FavoriteHospital, SavedSearch},
    hospital::{GeoPoint, Hospital},
};

/// Saved searches kept before the oldest are dropped.
pub const MAX_SAVED_SEARCHES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchData {
    /// Newest first.
    pub searches: Vec<SavedSearch>,
    /// Most recently added first.
    pub favorites: Vec<FavoriteHospital>,
    pub last_location: Option<GeoPoint>,
}

#[derive(Clone, Default)]
pub struct SearchLog {
    data: Arc<Mutex<SearchData>>,
}

impl SearchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from a persisted `SearchData` document.
    pub fn restore(json: &str) -> Self {
        let data = serde_json::from_str(json).unwrap_or_else(|e| {
            warn!(error = %e, "stored search data unreadable, starting empty");
            SearchData::default()
        });
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Record a search. An earlier search with the same query is replaced.
    pub fn add_search(
        &self,
        query: &str,
        filters: serde_json::Value,
        results_count: usize,
    ) -> SehatiResult<SavedSearch> {
        let search = SavedSearch {
            id: Uuid::new_v4(),
            query: query.to_string(),
            filters,
            timestamp: Utc::now(),
            results_count,
        };

        let mut data = self.lock()?;
        data.searches.retain(|s| s.query != query);
        data.searches.insert(0, search.clone());
        data.searches.truncate(MAX_SAVED_SEARCHES);

        debug!(query = %query, results = results_count, "search saved");
        Ok(search)
    }

    /// Pin a hospital to the top of the favourites, replacing any earlier
    /// entry for the same id.
    pub fn add_favorite(&self, hospital: &Hospital) -> SehatiResult<()> {
        let favorite = FavoriteHospital::from_hospital(hospital, Utc::now());
        let mut data = self.lock()?;
        data.favorites.retain(|f| f.id != hospital.id);
        data.favorites.insert(0, favorite);
        Ok(())
    }

    /// Returns whether anything was removed.
    pub fn remove_favorite(&self, hospital_id: &str) -> SehatiResult<bool> {
        let mut data = self.lock()?;
        let before = data.favorites.len();
        data.favorites.retain(|f| f.id != hospital_id);
        Ok(data.favorites.len() != before)
    }

    pub fn is_favorite(&self, hospital_id: &str) -> SehatiResult<bool> {
        Ok(self.lock()?.favorites.iter().any(|f| f.id == hospital_id))
    }

    pub fn save_location(&self, point: GeoPoint) -> SehatiResult<()> {
        self.lock()?.last_location = Some(point);
        Ok(())
    }

    pub fn last_location(&self) -> SehatiResult<Option<GeoPoint>> {
        Ok(self.lock()?.last_location)
    }

    pub fn searches(&self) -> SehatiResult<Vec<SavedSearch>> {
        Ok(self.lock()?.searches.clone())
    }

    pub fn favorites(&self) -> SehatiResult<Vec<FavoriteHospital>> {
        Ok(self.lock()?.favorites.clone())
    }

    pub fn snapshot(&self) -> SehatiResult<SearchData> {
        Ok(self.lock()?.clone())
    }

    /// The log as a JSON document for `restore`.
    pub fn to_json(&self) -> SehatiResult<String> {
        let data = self.lock()?;
        serde_json::to_string(&*data).map_err(|e| SehatiError::StorageFailed {
            reason: format!("failed to encode search data: {}", e),
        })
    }

    /// Forget searches, favourites and location.
    pub fn clear(&self) -> SehatiResult<()> {
        *self.lock()? = SearchData::default();
        Ok(())
    }

    fn lock(&self) -> SehatiResult<std::sync::MutexGuard<'_, SearchData>> {
        self.data.lock().map_err(|e| SehatiError::StorageFailed {
            reason: format!("search log lock poisoned: {}", e),
        })
    }
}
