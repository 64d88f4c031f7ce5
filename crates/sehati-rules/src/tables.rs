//! Rule table types and configuration schema.
//!
//! A `RuleTables` value is deserialized from TOML and holds everything the
//! three decision components read: the triage tiers, the emergency-flag
//! keyword lists and thresholds, and the suggestion catalogue. Keyword lists
//! are data, not code: swapping the table file changes the vocabulary without
//! touching the classifier.
//!
//! Example:
//! ```toml
//! [[triage.tiers]]
//! urgency = "EMERGENCY"
//! min_severity = 8
//! confidence = 0.95
//! keywords = ["loss of consciousness"]
//! recommendation = "Call emergency services now"
//! urgency_window = "immediately"
//!
//! [triage.fallback]
//! urgency = "SELF_CARE"
//! confidence = 0.65
//! recommendation = "Home care with monitoring"
//! urgency_window = "monitor"
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    suggestion::SuggestionKind,
    symptom::{TriageVerdict, UrgencyClass},
};
use sehati_core::session::SessionTiming;

/// The default tables shipped with the crate.
const BUILTIN_TABLES: &str = include_str!("../tables/default.toml");

/// The complete rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    #[serde(default)]
    pub session: SessionConfig,
    pub triage: TriageTables,
    pub flags: FlagTables,
    /// Evaluated in declaration order; the order breaks score ties.
    #[serde(default)]
    pub suggestions: Vec<SuggestionRule>,
}

impl RuleTables {
    /// Parse `s` as TOML, normalise keywords and check table consistency.
    ///
    /// Returns `SehatiError::ConfigError` if the TOML is malformed, does not
    /// match the `RuleTables` schema, or fails `validate`.
    pub fn from_toml_str(s: &str) -> SehatiResult<Self> {
        let mut tables: RuleTables = toml::from_str(s).map_err(|e| SehatiError::ConfigError {
            reason: format!("failed to parse rule TOML: {}", e),
        })?;
        tables.normalize();
        tables.validate()?;
        Ok(tables)
    }

    /// Read the file at `path` and parse it as rule tables.
    pub fn from_file(path: &Path) -> SehatiResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SehatiError::ConfigError {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The tables embedded in the crate.
    pub fn builtin() -> SehatiResult<Self> {
        Self::from_toml_str(BUILTIN_TABLES)
    }

    /// Lower-case and trim every keyword so matching can compare against a
    /// lower-cased haystack directly.
    fn normalize(&mut self) {
        let lower = |list: &mut Vec<String>| {
            for k in list.iter_mut() {
                *k = k.trim().to_lowercase();
            }
        };

        for tier in &mut self.triage.tiers {
            lower(&mut tier.keywords);
        }
        lower(&mut self.flags.high_risk_conditions);
        lower(&mut self.flags.critical_medications);
        for rule in &mut self.suggestions {
            match &mut rule.trigger {
                Trigger::ConditionKeyword { keywords } | Trigger::FamilyHistoryKeyword { keywords } => {
                    lower(keywords)
                }
                Trigger::GenderAgeOver { genders, .. } => lower(genders),
                _ => {}
            }
        }
    }

    /// Check the invariants the components rely on.
    ///
    /// - tiers are listed most urgent first, and the fallback is less urgent
    ///   than every tier
    /// - severity thresholds strictly decrease down the tier list
    /// - confidences lie in (0, 1], scores in 0..=100
    /// - no keyword is blank (a blank keyword would match every text)
    /// - `condition-severe` urgency is only used with a condition trigger
    pub fn validate(&self) -> SehatiResult<()> {
        let err = |reason: String| -> SehatiResult<()> { Err(SehatiError::ConfigError { reason }) };

        let mut previous: Option<&TriageTier> = None;
        for tier in self.triage.tiers.iter().chain(std::iter::once(&self.triage.fallback)) {
            if !(tier.confidence > 0.0 && tier.confidence <= 1.0) {
                return err(format!(
                    "triage tier {} has confidence {} outside (0, 1]",
                    tier.urgency, tier.confidence
                ));
            }
            if tier.keywords.iter().any(|k| k.is_empty()) {
                return err(format!("triage tier {} has a blank keyword", tier.urgency));
            }
            if let Some(prev) = previous {
                if tier.urgency <= prev.urgency {
                    return err(format!(
                        "triage tier {} must be listed before the less urgent tier {}",
                        tier.urgency, prev.urgency
                    ));
                }
                if let (Some(prev_min), Some(min)) = (prev.min_severity, tier.min_severity) {
                    if min >= prev_min {
                        return err(format!(
                            "triage tier {} min_severity {} must be below {} of tier {}",
                            tier.urgency, min, prev_min, prev.urgency
                        ));
                    }
                }
            }
            previous = Some(tier);
        }

        if self
            .flags
            .high_risk_conditions
            .iter()
            .chain(&self.flags.critical_medications)
            .any(|k| k.is_empty())
        {
            return err("flag tables contain a blank keyword".to_string());
        }
        if self.flags.low_weight_kg >= self.flags.high_weight_kg {
            return err(format!(
                "low_weight_kg {} must be below high_weight_kg {}",
                self.flags.low_weight_kg, self.flags.high_weight_kg
            ));
        }

        for rule in &self.suggestions {
            if rule.id.trim().is_empty() {
                return err("suggestion rule with an empty id".to_string());
            }
            if rule.score > 100 {
                return err(format!("suggestion '{}' has score {} above 100", rule.id, rule.score));
            }
            let keywords: &[String] = match &rule.trigger {
                Trigger::ConditionKeyword { keywords } | Trigger::FamilyHistoryKeyword { keywords } => {
                    keywords
                }
                Trigger::GenderAgeOver { genders, .. } => genders,
                _ => &[],
            };
            if keywords.iter().any(|k| k.is_empty()) {
                return err(format!("suggestion '{}' has a blank keyword", rule.id));
            }
            if rule.urgency == UrgencyPolicy::ConditionSevere
                && !matches!(rule.trigger, Trigger::ConditionKeyword { .. })
            {
                return err(format!(
                    "suggestion '{}' uses condition-severe urgency without a condition-keyword trigger",
                    rule.id
                ));
            }
        }

        Ok(())
    }
}

/// Timer settings for the profile screen, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub debounce_ms: u64,
    pub autosave_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let timing = SessionTiming::default();
        Self {
            debounce_ms: timing.debounce.as_millis() as u64,
            autosave_ms: timing.autosave.as_millis() as u64,
        }
    }
}

impl SessionConfig {
    pub fn timing(&self) -> SessionTiming {
        SessionTiming {
            debounce: Duration::from_millis(self.debounce_ms),
            autosave: Duration::from_millis(self.autosave_ms),
        }
    }
}

// ── Triage ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageTables {
    /// Most urgent first. The first tier that matches wins.
    pub tiers: Vec<TriageTier>,
    /// Verdict when no tier matches. Its keywords and threshold are ignored.
    pub fallback: TriageTier,
}

/// One urgency tier: its triggers and the verdict template it produces.
///
/// A tier matches when the symptom text contains any of `keywords`, or when
/// the reported severity is at least `min_severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageTier {
    pub urgency: UrgencyClass,
    #[serde(default)]
    pub min_severity: Option<u8>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub confidence: f64,
    pub recommendation: String,
    pub urgency_window: String,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub warning_signs: Vec<String>,
}

impl TriageTier {
    pub fn verdict(&self) -> TriageVerdict {
        TriageVerdict {
            urgency: self.urgency,
            recommendation: self.recommendation.clone(),
            urgency_window: self.urgency_window.clone(),
            confidence: self.confidence,
            reasons: self.reasons.clone(),
            next_steps: self.next_steps.clone(),
            warning_signs: self.warning_signs.clone(),
        }
    }
}

// ── Emergency flags ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagTables {
    pub high_risk_conditions: Vec<String>,
    pub critical_medications: Vec<String>,
    /// Weights strictly above this raise the high-weight flag.
    pub high_weight_kg: f64,
    /// Weights strictly below this raise the low-weight flag.
    pub low_weight_kg: f64,
    pub messages: FlagMessages,
}

/// Flag wording. `{name}` and `{allergen}` are replaced with profile values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagMessages {
    pub high_risk_condition: String,
    pub severe_condition: String,
    pub critical_medication: String,
    pub severe_allergy: String,
    pub high_weight: String,
    pub low_weight: String,
}

// ── Suggestions ───────────────────────────────────────────────────────────────

/// One entry of the suggestion catalogue.
///
/// Example in TOML:
/// ```toml
/// [[suggestions]]
/// id = "endocrinologist"
/// title = "Endocrinologist"
/// kind = "specialist"
/// score = 95
/// urgency = "condition-severe"
/// trigger = { type = "condition-keyword", keywords = ["diabetes"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRule {
    /// Stable key; duplicates in the output collapse onto the first.
    pub id: String,
    pub title: String,
    pub kind: SuggestionKind,
    pub score: u8,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub urgency: UrgencyPolicy,
    pub trigger: Trigger,
}

/// What must hold in the profile for a suggestion to fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Trigger {
    /// Age in full years strictly above `years`.
    AgeOver { years: i32 },
    /// Fires once per current condition whose name contains a keyword.
    ConditionKeyword { keywords: Vec<String> },
    /// More than `count` current medications.
    MedicationCountOver { count: usize },
    /// At least one allergy marked severe.
    SevereAllergy,
    /// At least one family-history condition contains a keyword.
    FamilyHistoryKeyword { keywords: Vec<String> },
    /// Gender equals one of `genders` and age strictly above `years`.
    GenderAgeOver { genders: Vec<String>, years: i32 },
    /// Body mass index strictly above `threshold`.
    BmiOver { threshold: f64 },
}

/// How a fired suggestion's `urgent` flag is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyPolicy {
    #[default]
    Never,
    Always,
    /// Urgent when the condition that fired the rule is marked severe.
    ConditionSevere,
}
