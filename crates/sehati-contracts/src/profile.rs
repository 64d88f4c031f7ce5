//! The medical profile aggregate.
//!
//! Assembled by the form layer step by step as the patient moves through the
//! profile wizard, then handed by value to the decision components on every
//! change. Every list defaults to empty and every free-text field defaults to
//! the empty string, so rule evaluation never has to tell "absent" apart
//! from "empty".
//!
//! Field names follow the JSON the form layer produces (camelCase).

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Clinical severity attached to a condition or allergy.
///
/// The form stores the Arabic labels; both spellings deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "خفيف")]
    Mild,
    #[serde(alias = "متوسط")]
    Moderate,
    #[serde(alias = "شديد")]
    Severe,
}

impl Severity {
    /// Parse an English or Arabic label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mild" | "خفيف" => Some(Severity::Mild),
            "moderate" | "متوسط" => Some(Severity::Moderate),
            "severe" | "شديد" => Some(Severity::Severe),
            _ => None,
        }
    }
}

/// The form stores `""` when no severity was picked. Blank and unknown
/// labels read as "not given" so the draft still loads.
fn optional_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Severity::parse))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalProfile {
    pub basic_info: BasicInfo,
    pub conditions: Conditions,
    pub medications: Medications,
    pub vitals: Vitals,
    pub supporters: Supporters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    /// ISO date (`YYYY-MM-DD`) or an RFC 3339 timestamp.
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: Option<String>,
    pub emergency_contact: EmergencyContact,
}

impl BasicInfo {
    /// Parse `date_of_birth`, or `None` when it is blank or malformed.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date_of_birth)
    }

    /// Age in full years on `today`.
    ///
    /// One year is subtracted when today's month/day precedes the birth
    /// month/day. Returns `None` when the birth date cannot be parsed.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let born = self.birth_date()?;
        let mut age = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            age -= 1;
        }
        Some(age)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conditions {
    pub current_conditions: Vec<Condition>,
    pub past_surgeries: Vec<Surgery>,
    pub family_history: Vec<FamilyHistoryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    pub diagnosed_date: Option<String>,
    #[serde(deserialize_with = "optional_severity")]
    pub severity: Option<Severity>,
    pub notes: Option<String>,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn is_severe(&self) -> bool {
        self.severity == Some(Severity::Severe)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Surgery {
    pub name: String,
    pub date: Option<String>,
    pub hospital: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyHistoryEntry {
    pub condition: String,
    pub relation: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Medications {
    pub current_medications: Vec<Medication>,
    pub allergies: Vec<Allergy>,
    pub supplements: Vec<Supplement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<String>,
    pub prescribed_by: Option<String>,
    pub notes: Option<String>,
}

impl Medication {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Allergy {
    pub allergen: String,
    pub reaction: Option<String>,
    #[serde(deserialize_with = "optional_severity")]
    pub severity: Option<Severity>,
}

impl Allergy {
    pub fn is_severe(&self) -> bool {
        self.severity == Some(Severity::Severe)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplement {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vitals {
    /// Height in centimetres, as typed into the form.
    pub height: Option<String>,
    /// Weight in kilograms, as typed into the form.
    pub weight: Option<String>,
    pub blood_type: Option<String>,
    pub recent_tests: Vec<TestResult>,
}

impl Vitals {
    pub fn height_cm(&self) -> Option<f64> {
        self.height.as_deref().and_then(parse_measurement)
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.as_deref().and_then(parse_measurement)
    }

    /// Body mass index, `weight_kg / (height_cm / 100)^2`.
    ///
    /// `None` unless both measurements parse and the height is positive.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm()? / 100.0;
        let weight = self.weight_kg()?;
        if height_m <= 0.0 {
            return None;
        }
        Some(weight / (height_m * height_m))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestResult {
    pub test_name: String,
    pub date: Option<String>,
    pub result: Option<String>,
    pub normal_range: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supporters {
    pub primary_doctor: Option<Doctor>,
    pub specialists: Vec<Doctor>,
    pub preferred_hospital: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Doctor {
    pub name: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hospital: Option<String>,
}

/// Parse a number typed into a free-text form field.
///
/// Reads the longest leading decimal number (`"72.5 kg"` → 72.5) after
/// trimming whitespace. Anything without a leading number, or that does not
/// yield a finite value, is `None`: rules treat it as absent.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    s[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse an ISO calendar date or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
