//! # sehati-ref
//!
//! Reference runtime wiring the Sehati components together, plus three
//! walk-through scenarios on mock data:
//!
//! 1. **Symptom triage**: reports of every urgency class go through the
//!    assessor and land in the history log.
//! 2. **Profile review**: a patient fills in the profile wizard; the session
//!    debounces the review, autosaves the draft, then submits it.
//! 3. **Hospital search**: filtered, distance-sorted search with saved
//!    searches, favourites and an export.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod mock_data;
pub mod scenarios;

use sehati_contracts::error::SehatiResult;
use sehati_core::Assessor;
use sehati_rules::{CatalogSuggestionGenerator, KeywordFlagDetector, KeywordTriageClassifier, RuleTables};
use sehati_store::{InMemoryHistoryLog, InMemoryProfileStore};
use sehati_validate::SchemaValidator;

/// An assessor over in-memory stores, with inspectable handles to those
/// stores.
pub struct Runtime {
    pub assessor: Assessor,
    pub profiles: InMemoryProfileStore,
    pub history: InMemoryHistoryLog,
}

impl Runtime {
    /// Wire the rule-table components, the schema validator and fresh
    /// stores. The store handles share state with the assessor's copies.
    pub fn new(tables: &RuleTables) -> Self {
        let profiles = InMemoryProfileStore::new();
        let history = InMemoryHistoryLog::new();
        let assessor = Assessor::new(
            Box::new(KeywordTriageClassifier::from_tables(tables)),
            Box::new(KeywordFlagDetector::from_tables(tables)),
            Box::new(CatalogSuggestionGenerator::from_tables(tables)),
            Box::new(SchemaValidator::new()),
            Box::new(profiles.clone()),
            Box::new(history.clone()),
        );
        Self {
            assessor,
            profiles,
            history,
        }
    }

    /// A runtime over the built-in rule tables.
    pub fn builtin() -> SehatiResult<Self> {
        Ok(Self::new(&RuleTables::builtin()?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
