//! Core trait definitions for the Sehati decision pipeline.
//!
//! Three traits describe the pure decision components:
//!
//! - `TriageClassifier`    — symptom report → urgency verdict
//! - `FlagDetector`        — profile → emergency flags
//! - `SuggestionGenerator` — profile → ranked suggestions
//!
//! and three describe the collaborators around them:
//!
//! - `InputValidator`    — checks reports and profiles before use
//! - `ProfileRepository` — loads and saves the profile draft
//! - `HistoryLog`        — append-only symptom history
//!
//! The assessor wires them together. Decision components hold no state
//! between calls and must be safe to call from any thread.

use chrono::NaiveDate;

use sehati_contracts::{
    error::SehatiResult,
    history::SymptomEntry,
    profile::MedicalProfile,
    suggestion::{EmergencyFlagSet, Suggestion},
    symptom::{SymptomReport, TriageVerdict},
    validate::ValidationReport,
};

/// Maps a symptom report onto exactly one urgency verdict.
///
/// The keyword-table classifier is one implementation; a model-backed
/// classifier can replace it without changing the `TriageVerdict` contract.
pub trait TriageClassifier: Send + Sync {
    /// Classify `report`.
    ///
    /// Total and deterministic: the same report always yields the same
    /// verdict. Callers must reject blank `free_text` before calling.
    fn classify(&self, report: &SymptomReport) -> TriageVerdict;

    /// Short name used in logs, e.g. "keyword-table".
    fn name(&self) -> &str;
}

/// Scans a profile for data that may need immediate clinical attention.
pub trait FlagDetector: Send + Sync {
    /// Return every warning that applies, in rule order. Empty means none.
    fn detect_flags(&self, profile: &MedicalProfile) -> EmergencyFlagSet;
}

/// Turns a profile into a ranked list of specialists, services and tests.
pub trait SuggestionGenerator: Send + Sync {
    /// Generate suggestions as of `today`, which anchors the age calculation.
    ///
    /// The result has unique ids, is sorted by score descending and holds at
    /// most six entries.
    fn generate_suggestions(&self, profile: &MedicalProfile, today: NaiveDate) -> Vec<Suggestion>;
}

/// Validates input at the caller boundary.
///
/// Implementations collect every failure rather than stopping at the first,
/// so the form can highlight all problems at once.
pub trait InputValidator: Send + Sync {
    fn validate_report(&self, report: &SymptomReport) -> SehatiResult<ValidationReport>;

    fn validate_profile(&self, profile: &MedicalProfile) -> SehatiResult<ValidationReport>;
}

/// Where the profile draft lives between sessions.
pub trait ProfileRepository: Send + Sync {
    /// Return the stored draft, or `None` if nothing was saved yet.
    fn load_profile(&self) -> SehatiResult<Option<MedicalProfile>>;

    /// Replace the stored draft. Returns `true` if the stored content changed.
    fn save_profile(&self, profile: &MedicalProfile) -> SehatiResult<bool>;
}

/// Append-only log of past symptom analyses.
pub trait HistoryLog: Send + Sync {
    /// Record one analysis. Implementations may evict the oldest entries.
    fn append_history(&self, entry: &SymptomEntry) -> SehatiResult<()>;

    /// The newest `limit` entries, newest first.
    fn recent(&self, limit: usize) -> SehatiResult<Vec<SymptomEntry>>;
}
