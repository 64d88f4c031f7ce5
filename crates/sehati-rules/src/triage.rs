//! Keyword-table triage classifier.
//!
//! `KeywordTriageClassifier` implements `TriageClassifier` from sehati-core.
//!
//! Classification algorithm:
//!
//! 1. Lower-case the symptom text.
//! 2. Walk the tiers in declaration order (most urgent first). A tier matches
//!    when the text contains any of its keywords, or when the severity is at
//!    least the tier's `min_severity`.
//! 3. The first matching tier's template is the verdict. Lower tiers are not
//!    consulted, even if their keywords also appear.
//! 4. No tier matched → the fallback template.

use tracing::debug;

use sehati_contracts::symptom::{SymptomReport, TriageVerdict};
use sehati_core::traits::TriageClassifier;

use crate::tables::{RuleTables, TriageTables, TriageTier};

#[derive(Debug, Clone)]
pub struct KeywordTriageClassifier {
    tables: TriageTables,
}

impl KeywordTriageClassifier {
    pub fn new(tables: TriageTables) -> Self {
        Self { tables }
    }

    pub fn from_tables(tables: &RuleTables) -> Self {
        Self::new(tables.triage.clone())
    }

    /// Why `tier` matched `text`/`severity`, if it did.
    fn match_reason<'t>(tier: &'t TriageTier, text: &str, severity: u8) -> Option<MatchReason<'t>> {
        if let Some(keyword) = tier.keywords.iter().find(|k| text.contains(k.as_str())) {
            return Some(MatchReason::Keyword(keyword));
        }
        match tier.min_severity {
            Some(min) if severity >= min => Some(MatchReason::Severity(min)),
            _ => None,
        }
    }
}

enum MatchReason<'t> {
    Keyword(&'t str),
    Severity(u8),
}

impl TriageClassifier for KeywordTriageClassifier {
    fn classify(&self, report: &SymptomReport) -> TriageVerdict {
        let text = report.free_text.to_lowercase();

        for tier in &self.tables.tiers {
            match Self::match_reason(tier, &text, report.severity) {
                Some(MatchReason::Keyword(keyword)) => {
                    debug!(urgency = %tier.urgency, keyword, "triage tier matched on keyword");
                    return tier.verdict();
                }
                Some(MatchReason::Severity(min)) => {
                    debug!(
                        urgency = %tier.urgency,
                        severity = report.severity,
                        min_severity = min,
                        "triage tier matched on severity"
                    );
                    return tier.verdict();
                }
                None => continue,
            }
        }

        debug!(urgency = %self.tables.fallback.urgency, "no triage tier matched; using fallback");
        self.tables.fallback.verdict()
    }

    fn name(&self) -> &str {
        "keyword-table"
    }
}
