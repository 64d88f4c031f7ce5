//! Input validation schema and report types.
//!
//! Before a symptom report is classified or a profile is submitted, the
//! validator runs it against a `ValidationSchema`. Only a passing
//! `ValidationReport` lets the assessor proceed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON Schema document plus the semantic rules JSON Schema cannot express.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSchema {
    /// e.g. "symptom-report-v1".
    pub schema_id: String,
    /// `Value::Null` means no structural constraint.
    pub json_schema: Value,
    pub rules: Vec<ValidationRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Referenced in failure reports.
    pub rule_id: String,
    /// The message shown to the patient when the rule fails.
    pub message: String,
    pub rule_type: ValidationRuleType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValidationRuleType {
    /// The string at `field_path` must contain non-whitespace characters.
    NonBlank { field_path: String },

    /// The string at `field_path` must have at least `min` characters.
    MinLength { field_path: String, min: usize },

    /// The number at `field_path` must lie in `min..=max`.
    Range { field_path: String, min: f64, max: f64 },

    /// The string at `field_path` must parse as a calendar date.
    Date { field_path: String },

    /// When present and non-empty, the string at `field_path` must start with
    /// a number.
    Numeric { field_path: String },

    /// When present and non-empty, the string at `field_path` must look like
    /// an e-mail address.
    Email { field_path: String },

    /// The field at `field_path` must be an array whose elements each carry a
    /// non-blank `item_field`.
    EachNonBlank { field_path: String, item_field: String },
}

/// Outcome of validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True only if every rule passed.
    pub passed: bool,
    /// Every failure found; empty on pass.
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// All failure messages joined for an error reason.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("{}: {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub rule_id: String,
    pub message: String,
}
