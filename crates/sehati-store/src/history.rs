//! In-memory symptom history, newest first.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tracing::debug;

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    history::SymptomEntry,
};
use sehati_core::traits::HistoryLog;

/// Entries kept before the oldest are dropped.
pub const HISTORY_CAPACITY: usize = 50;

#[derive(Clone)]
pub struct InMemoryHistoryLog {
    entries: Arc<Mutex<VecDeque<SymptomEntry>>>,
    capacity: usize,
}

impl Default for InMemoryHistoryLog {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl InMemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn len(&self) -> SehatiResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> SehatiResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn clear(&self) -> SehatiResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> SehatiResult<std::sync::MutexGuard<'_, VecDeque<SymptomEntry>>> {
        self.entries.lock().map_err(|e| SehatiError::StorageFailed {
            reason: format!("history lock poisoned: {}", e),
        })
    }
}

impl HistoryLog for InMemoryHistoryLog {
    fn append_history(&self, entry: &SymptomEntry) -> SehatiResult<()> {
        let mut entries = self.lock()?;
        entries.push_front(entry.clone());
        entries.truncate(self.capacity);
        debug!(id = %entry.id, kept = entries.len(), "history entry appended");
        Ok(())
    }

    fn recent(&self, limit: usize) -> SehatiResult<Vec<SymptomEntry>> {
        let entries = self.lock()?;
        Ok(entries.iter().take(limit).cloned().collect())
    }
}
