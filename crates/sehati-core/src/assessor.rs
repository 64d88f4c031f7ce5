//! The Sehati assessor: the caller boundary in front of the decision core.
//!
//! The assessor enforces the order every analysis goes through:
//!
//!   Validate → Classify → Record history
//!
//! The classifier is never called with a report that failed validation, so
//! the decision components can stay total functions that assume well-formed
//! input. Profile review is deliberately not validated: drafts are partial
//! while the patient is still filling in the wizard.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    history::SymptomEntry,
    profile::MedicalProfile,
    suggestion::ProfileReview,
    symptom::{SymptomReport, TriageVerdict},
};

use crate::traits::{
    FlagDetector, HistoryLog, InputValidator, ProfileRepository, SuggestionGenerator,
    TriageClassifier,
};

/// Owns the decision components and the collaborators they report to.
///
/// One assessor serves a whole session; every method takes its input by
/// reference and leaves it untouched.
pub struct Assessor {
    classifier: Box<dyn TriageClassifier>,
    flags: Box<dyn FlagDetector>,
    suggestions: Box<dyn SuggestionGenerator>,
    validator: Box<dyn InputValidator>,
    profiles: Box<dyn ProfileRepository>,
    history: Box<dyn HistoryLog>,
}

impl Assessor {
    pub fn new(
        classifier: Box<dyn TriageClassifier>,
        flags: Box<dyn FlagDetector>,
        suggestions: Box<dyn SuggestionGenerator>,
        validator: Box<dyn InputValidator>,
        profiles: Box<dyn ProfileRepository>,
        history: Box<dyn HistoryLog>,
    ) -> Self {
        Self {
            classifier,
            flags,
            suggestions,
            validator,
            profiles,
            history,
        }
    }

    /// Classify a symptom report and record it in the history log.
    ///
    /// # Pipeline
    ///
    /// 1. Validate the report; any failure → `SehatiError::InvalidInput`
    /// 2. Classify — **only reachable after step 1 passes**
    /// 3. Append a `SymptomEntry` to the history log; a failed write is
    ///    returned as an error rather than dropped
    ///
    /// `selected_symptoms` are the symptom chips picked next to the free text;
    /// they are stored with the entry but do not influence the verdict.
    pub fn analyze_symptoms(
        &self,
        report: &SymptomReport,
        selected_symptoms: &[String],
    ) -> SehatiResult<TriageVerdict> {
        let validation = self.validator.validate_report(report)?;
        if !validation.passed {
            let summary = validation.summary();
            warn!(failures = %summary, "symptom report rejected");
            return Err(SehatiError::InvalidInput { reason: summary });
        }

        debug!(
            classifier = self.classifier.name(),
            severity = report.severity,
            "classifying symptom report"
        );
        let verdict = self.classifier.classify(report);

        info!(
            urgency = %verdict.urgency,
            confidence = verdict.confidence,
            "triage verdict"
        );

        let entry = SymptomEntry {
            id: Uuid::new_v4(),
            symptoms: selected_symptoms.to_vec(),
            description: report.free_text.clone(),
            severity: report.severity,
            duration: report.duration,
            timestamp: Utc::now(),
            verdict: verdict.clone(),
        };
        self.history.append_history(&entry)?;

        Ok(verdict)
    }

    /// Compute emergency flags and suggestions for a (possibly partial) draft.
    pub fn review_profile(&self, profile: &MedicalProfile, today: NaiveDate) -> ProfileReview {
        let review = ProfileReview {
            flags: self.flags.detect_flags(profile),
            suggestions: self.suggestions.generate_suggestions(profile, today),
        };
        debug!(
            flags = review.flags.len(),
            suggestions = review.suggestions.len(),
            "profile reviewed"
        );
        review
    }

    /// Persist a draft without validating it. Returns whether it changed.
    pub fn save_draft(&self, profile: &MedicalProfile) -> SehatiResult<bool> {
        let changed = self.profiles.save_profile(profile)?;
        if changed {
            info!("profile draft saved");
        }
        Ok(changed)
    }

    pub fn load_draft(&self) -> SehatiResult<Option<MedicalProfile>> {
        self.profiles.load_profile()
    }

    /// Validate a completed profile and save it.
    ///
    /// Nothing is written when validation fails.
    pub fn submit_profile(&self, profile: &MedicalProfile) -> SehatiResult<()> {
        let validation = self.validator.validate_profile(profile)?;
        if !validation.passed {
            let summary = validation.summary();
            warn!(failures = %summary, "profile submission rejected");
            return Err(SehatiError::ValidationFailed { reason: summary });
        }
        self.profiles.save_profile(profile)?;
        info!("profile submitted");
        Ok(())
    }

    /// The newest `limit` history entries, newest first.
    pub fn history(&self, limit: usize) -> SehatiResult<Vec<SymptomEntry>> {
        self.history.recent(limit)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
