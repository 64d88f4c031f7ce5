//! Schema-based input validator.
//!
//! `SchemaValidator` implements the `InputValidator` trait from `sehati-core`.
//! Validation runs in two phases:
//!
//! 1. **Structural**: the input's JSON form is checked against
//!    `ValidationSchema::json_schema` with the `jsonschema` crate.
//! 2. **Semantic**: each `ValidationRule` is evaluated in order. All failures
//!    are collected before returning so the form can mark every bad field at
//!    once.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    profile::{parse_date, parse_measurement, MedicalProfile},
    symptom::SymptomReport,
    validate::{ValidationFailure, ValidationReport, ValidationRuleType, ValidationSchema},
};
use sehati_core::traits::InputValidator;

use crate::schemas::{medical_profile_schema, symptom_report_schema};

/// Validates symptom reports and medical profiles against their schemas.
pub struct SchemaValidator {
    report_schema: ValidationSchema,
    profile_schema: ValidationSchema,
}

impl SchemaValidator {
    /// A validator using the built-in report and profile schemas.
    pub fn new() -> Self {
        Self::with_schemas(symptom_report_schema(), medical_profile_schema())
    }

    pub fn with_schemas(report_schema: ValidationSchema, profile_schema: ValidationSchema) -> Self {
        Self {
            report_schema,
            profile_schema,
        }
    }

    /// Validate a raw JSON profile, e.g. one read from disk before it is
    /// deserialized.
    pub fn validate_profile_json(&self, value: &Value) -> ValidationReport {
        validate_value(value, &self.profile_schema)
    }

    fn validate_serializable<T: Serialize>(
        &self,
        input: &T,
        schema: &ValidationSchema,
    ) -> SehatiResult<ValidationReport> {
        let value = serde_json::to_value(input).map_err(|e| SehatiError::SchemaValidation {
            reason: format!("failed to encode input for '{}': {}", schema.schema_id, e),
        })?;
        Ok(validate_value(&value, schema))
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator for SchemaValidator {
    fn validate_report(&self, report: &SymptomReport) -> SehatiResult<ValidationReport> {
        self.validate_serializable(report, &self.report_schema)
    }

    fn validate_profile(&self, profile: &MedicalProfile) -> SehatiResult<ValidationReport> {
        self.validate_serializable(profile, &self.profile_schema)
    }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Resolve a dot-notation field path (e.g. `"basicInfo.phone"`) against a JSON
/// value. Returns `None` when any segment is missing or the value is JSON
/// `null`.
fn resolve_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = value;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(v) if !v.is_null() => current = v,
            _ => return None,
        }
    }
    Some(current)
}

fn is_blank(value: Option<&Value>) -> bool {
    filled(value).is_none()
}

/// Present and non-empty after trimming.
fn filled(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty())
}

/// Check `s` against a JSON Schema string `format` (e.g. `"email"`).
fn matches_format(s: &str, format: &str) -> bool {
    match jsonschema::options()
        .should_validate_formats(true)
        .build(&json!({ "type": "string", "format": format }))
    {
        Ok(validator) => validator.is_valid(&json!(s)),
        Err(e) => {
            warn!(%format, error = %e, "format schema failed to compile");
            false
        }
    }
}

/// Run both validation phases over `value`.
pub fn validate_value(value: &Value, schema: &ValidationSchema) -> ValidationReport {
    let mut failures: Vec<ValidationFailure> = Vec::new();

    // ── Phase 1: JSON Schema structural validation ────────────────────────────
    if !schema.json_schema.is_null() {
        match jsonschema::options().should_validate_formats(true).build(&schema.json_schema) {
            Ok(validator) => {
                for error in validator.iter_errors(value) {
                    let message = format!("JSON Schema violation at {}: {}", error.instance_path, error);
                    warn!(schema_id = %schema.schema_id, %message, "structural validation failure");
                    failures.push(ValidationFailure {
                        rule_id: "json-schema".to_string(),
                        message,
                    });
                }
            }
            Err(e) => {
                let message = format!("invalid JSON Schema document: {e}");
                warn!(schema_id = %schema.schema_id, %message, "schema compilation failure");
                failures.push(ValidationFailure {
                    rule_id: "json-schema".to_string(),
                    message,
                });
            }
        }
    }

    // ── Phase 2: Semantic rules ───────────────────────────────────────────────
    for rule in &schema.rules {
        debug!(rule_id = %rule.rule_id, "evaluating validation rule");

        let mut fail = |message: String| {
            warn!(rule_id = %rule.rule_id, %message, "validation rule failed");
            failures.push(ValidationFailure {
                rule_id: rule.rule_id.clone(),
                message,
            });
        };

        match &rule.rule_type {
            ValidationRuleType::NonBlank { field_path } => {
                if is_blank(resolve_path(value, field_path)) {
                    fail(rule.message.clone());
                }
            }

            ValidationRuleType::MinLength { field_path, min } => {
                let len = resolve_path(value, field_path)
                    .and_then(Value::as_str)
                    .map_or(0, |s| s.trim().chars().count());
                if len < *min {
                    fail(rule.message.clone());
                }
            }

            ValidationRuleType::Range { field_path, min, max } => {
                match resolve_path(value, field_path).and_then(Value::as_f64) {
                    Some(n) if n >= *min && n <= *max => {}
                    _ => fail(rule.message.clone()),
                }
            }

            ValidationRuleType::Date { field_path } => {
                let parsed = resolve_path(value, field_path).and_then(Value::as_str).and_then(parse_date);
                if parsed.is_none() {
                    fail(rule.message.clone());
                }
            }

            // Optional: only a filled-in value is checked.
            ValidationRuleType::Numeric { field_path } => {
                if let Some(s) = filled(resolve_path(value, field_path)) {
                    if parse_measurement(s).is_none() {
                        fail(rule.message.clone());
                    }
                }
            }

            ValidationRuleType::Email { field_path } => {
                if let Some(s) = filled(resolve_path(value, field_path)) {
                    if !matches_format(s, "email") {
                        fail(rule.message.clone());
                    }
                }
            }

            // A missing array is an empty one.
            ValidationRuleType::EachNonBlank { field_path, item_field } => {
                let items = resolve_path(value, field_path)
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for (i, item) in items.iter().enumerate() {
                    if is_blank(item.get(item_field.as_str())) {
                        fail(format!("{} (item {})", rule.message, i + 1));
                    }
                }
            }
        }
    }

    let report = ValidationReport::from_failures(failures);
    debug!(
        schema_id = %schema.schema_id,
        passed = report.passed,
        failure_count = report.failures.len(),
        "validation complete"
    );
    report
}
