//! In-memory implementation of `ProfileRepository`.
//!
//! Holds at most one draft. Every save is fingerprinted; a save whose
//! fingerprint matches the stored one is a no-op and reports `false`, which
//! lets the autosave timer fire freely without rewriting identical drafts.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    profile::MedicalProfile,
};
use sehati_core::traits::ProfileRepository;

use crate::fingerprint::fingerprint;

struct Stored {
    profile: MedicalProfile,
    hash: String,
    saved_at: DateTime<Utc>,
}

#[derive(Default)]
pub(crate) struct ProfileState {
    stored: Option<Stored>,
    writes: u64,
}

/// A single-slot draft store.
///
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    state: Arc<Mutex<ProfileState>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of the stored draft, if any.
    pub fn current_fingerprint(&self) -> SehatiResult<Option<String>> {
        let state = self.lock()?;
        Ok(state.stored.as_ref().map(|s| s.hash.clone()))
    }

    /// When the stored draft was last written.
    pub fn saved_at(&self) -> SehatiResult<Option<DateTime<Utc>>> {
        let state = self.lock()?;
        Ok(state.stored.as_ref().map(|s| s.saved_at))
    }

    /// Number of saves that actually changed the stored draft.
    pub fn write_count(&self) -> SehatiResult<u64> {
        Ok(self.lock()?.writes)
    }

    pub fn clear(&self) -> SehatiResult<()> {
        self.lock()?.stored = None;
        Ok(())
    }

    fn lock(&self) -> SehatiResult<std::sync::MutexGuard<'_, ProfileState>> {
        self.state.lock().map_err(|e| SehatiError::StorageFailed {
            reason: format!("profile store lock poisoned: {}", e),
        })
    }
}

impl ProfileRepository for InMemoryProfileStore {
    fn load_profile(&self) -> SehatiResult<Option<MedicalProfile>> {
        let state = self.lock()?;
        Ok(state.stored.as_ref().map(|s| s.profile.clone()))
    }

    fn save_profile(&self, profile: &MedicalProfile) -> SehatiResult<bool> {
        let hash = fingerprint(profile)?;
        let mut state = self.lock()?;

        if state.stored.as_ref().is_some_and(|s| s.hash == hash) {
            debug!(fingerprint = %hash, "draft unchanged, save skipped");
            return Ok(false);
        }

        let saved_at = Utc::now();
        state.stored = Some(Stored {
            profile: profile.clone(),
            hash: hash.clone(),
            saved_at,
        });
        state.writes += 1;

        info!(fingerprint = %hash, writes = state.writes, "draft saved");
        Ok(true)
    }
}
