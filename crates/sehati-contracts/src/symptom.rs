//! Symptom report and triage verdict types.
//!
//! A `SymptomReport` is built fresh for every analysis and handed to a
//! `TriageClassifier`, which answers with exactly one `TriageVerdict`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How long the patient has had the symptoms.
///
/// Informational only: no triage rule reads it today. The original Arabic
/// labels used by the symptom form are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationLabel {
    #[serde(rename = "<1h", alias = "أقل من ساعة")]
    UnderAnHour,
    #[serde(rename = "few hours", alias = "ساعات قليلة")]
    FewHours,
    #[serde(rename = "1 day", alias = "يوم واحد")]
    OneDay,
    #[serde(rename = "several days", alias = "عدة أيام")]
    SeveralDays,
    #[serde(rename = "1 week", alias = "أسبوع")]
    OneWeek,
    #[serde(rename = ">1 week", alias = "أكثر من أسبوع")]
    OverAWeek,
}

impl DurationLabel {
    /// Every label, in the order the symptom form offers them.
    pub const ALL: [DurationLabel; 6] = [
        DurationLabel::UnderAnHour,
        DurationLabel::FewHours,
        DurationLabel::OneDay,
        DurationLabel::SeveralDays,
        DurationLabel::OneWeek,
        DurationLabel::OverAWeek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationLabel::UnderAnHour => "<1h",
            DurationLabel::FewHours => "few hours",
            DurationLabel::OneDay => "1 day",
            DurationLabel::SeveralDays => "several days",
            DurationLabel::OneWeek => "1 week",
            DurationLabel::OverAWeek => ">1 week",
        }
    }

    /// The label as the symptom form shows it.
    pub fn as_arabic(&self) -> &'static str {
        match self {
            DurationLabel::UnderAnHour => "أقل من ساعة",
            DurationLabel::FewHours => "ساعات قليلة",
            DurationLabel::OneDay => "يوم واحد",
            DurationLabel::SeveralDays => "عدة أيام",
            DurationLabel::OneWeek => "أسبوع",
            DurationLabel::OverAWeek => "أكثر من أسبوع",
        }
    }

    /// Parse a label as typed on the command line or stored in history,
    /// in either language.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s || label.as_arabic() == s)
    }
}

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The patient's description of what is wrong, as submitted for triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    /// Free-text description. Must be non-blank; the assessor rejects blank
    /// text before the classifier ever sees it.
    pub free_text: String,
    /// Self-assessed severity on a 1..=10 scale.
    pub severity: u8,
    #[serde(default, rename = "durationLabel")]
    pub duration: Option<DurationLabel>,
}

impl SymptomReport {
    pub fn new(free_text: impl Into<String>, severity: u8) -> Self {
        Self {
            free_text: free_text.into(),
            severity,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: DurationLabel) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Urgency tiers, ordered from most to least urgent.
///
/// The derived `Ord` follows declaration order, so `Emergency < SelfCare`:
/// sorting a list of classes puts the most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyClass {
    Emergency,
    Urgent,
    Routine,
    SelfCare,
}

impl UrgencyClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyClass::Emergency => "EMERGENCY",
            UrgencyClass::Urgent => "URGENT",
            UrgencyClass::Routine => "ROUTINE",
            UrgencyClass::SelfCare => "SELF_CARE",
        }
    }
}

impl fmt::Display for UrgencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classifier's answer for one `SymptomReport`.
///
/// Every text field is a per-tier template: two reports landing in the same
/// tier get identical wording regardless of which keyword matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageVerdict {
    #[serde(rename = "urgencyClass")]
    pub urgency: UrgencyClass,
    #[serde(rename = "recommendationText")]
    pub recommendation: String,
    /// Human-facing response window, e.g. "within 2 hours".
    pub urgency_window: String,
    /// In (0, 1].
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub next_steps: Vec<String>,
    pub warning_signs: Vec<String>,
}
