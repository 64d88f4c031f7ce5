//! # sehati-validate
//!
//! Input validation for Sehati.
//!
//! This crate provides [`engine::SchemaValidator`], which implements the
//! [`sehati_core::traits::InputValidator`] trait. Symptom reports and
//! medical profiles are validated in two phases:
//!
//! 1. **Structural**: JSON Schema validation via the `jsonschema` crate.
//! 2. **Semantic**: field rules (`NonBlank`, `MinLength`, `Range`, `Date`,
//!    `Numeric`, `Email`, `EachNonBlank`) evaluated against the input's JSON
//!    form.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use sehati_validate::SchemaValidator;
//! use sehati_core::traits::InputValidator;
//!
//! let report = SchemaValidator::new().validate_profile(&profile)?;
//! if !report.passed {
//!     eprintln!("{}", report.summary());
//! }
//! ```

pub mod engine;
pub mod schemas;

pub use engine::{validate_value, SchemaValidator};
pub use schemas::{medical_profile_schema, symptom_report_schema};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use sehati_contracts::{
        profile::{Allergy, Condition, EmergencyContact, MedicalProfile},
        symptom::SymptomReport,
        validate::{ValidationReport, ValidationRule, ValidationRuleType, ValidationSchema},
    };
    use sehati_core::traits::InputValidator;

    use super::{validate_value, SchemaValidator};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn complete_profile() -> MedicalProfile {
        let mut p = MedicalProfile::default();
        p.basic_info.first_name = "نورة".to_string();
        p.basic_info.last_name = "العتيبي".to_string();
        p.basic_info.date_of_birth = "1985-03-14".to_string();
        p.basic_info.gender = "أنثى".to_string();
        p.basic_info.phone = "0551234567".to_string();
        p.basic_info.email = Some("noura@example.com".to_string());
        p.basic_info.emergency_contact = EmergencyContact {
            name: "خالد".to_string(),
            phone: "0559876543".to_string(),
            relationship: "أخ".to_string(),
        };
        p.vitals.height = Some("165".to_string());
        p.vitals.weight = Some("62.5".to_string());
        p
    }

    fn rule_ids(report: &ValidationReport) -> Vec<&str> {
        report.failures.iter().map(|f| f.rule_id.as_str()).collect()
    }

    fn one_rule(rule_type: ValidationRuleType) -> ValidationSchema {
        ValidationSchema {
            schema_id: "test-schema-v1".to_string(),
            json_schema: serde_json::Value::Null,
            rules: vec![ValidationRule {
                rule_id: "r".to_string(),
                message: "bad".to_string(),
                rule_type,
            }],
        }
    }

    // ── Symptom reports ───────────────────────────────────────────────────────

    #[test]
    fn test_valid_report_passes() {
        let report = SchemaValidator::new()
            .validate_report(&SymptomReport::new("صداع خفيف", 2))
            .unwrap();
        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    #[test]
    fn test_blank_text_and_bad_severity_both_reported() {
        let validator = SchemaValidator::new();

        let report = validator.validate_report(&SymptomReport::new("   ", 0)).unwrap();
        assert!(!report.passed);
        assert_eq!(rule_ids(&report), vec!["report-text", "report-severity"]);

        let report = validator.validate_report(&SymptomReport::new("pain", 11)).unwrap();
        assert_eq!(rule_ids(&report), vec!["report-severity"]);
    }

    #[test]
    fn test_severity_bounds_inclusive() {
        let validator = SchemaValidator::new();
        for severity in [1, 10] {
            let report = validator.validate_report(&SymptomReport::new("pain", severity)).unwrap();
            assert!(report.passed, "severity {severity}: {:?}", report.failures);
        }
    }

    // ── Profiles ──────────────────────────────────────────────────────────────

    #[test]
    fn test_complete_profile_passes() {
        let report = SchemaValidator::new().validate_profile(&complete_profile()).unwrap();
        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    /// An empty draft fails every required basic-info rule at once.
    #[test]
    fn test_empty_profile_collects_all_failures() {
        let report = SchemaValidator::new().validate_profile(&MedicalProfile::default()).unwrap();

        assert!(!report.passed);
        assert_eq!(
            rule_ids(&report),
            vec![
                "first-name",
                "last-name",
                "date-of-birth",
                "gender",
                "phone",
                "emergency-contact-name",
                "emergency-contact-phone",
                "emergency-contact-relationship",
            ]
        );
    }

    #[test]
    fn test_field_format_rules() {
        let mut p = complete_profile();
        p.basic_info.phone = "05512".to_string();
        p.basic_info.email = Some("not-an-email".to_string());
        p.basic_info.date_of_birth = "14/03/1985".to_string();
        p.vitals.weight = Some("heavy".to_string());

        let report = SchemaValidator::new().validate_profile(&p).unwrap();

        assert_eq!(rule_ids(&report), vec!["date-of-birth", "phone", "email", "weight"]);
    }

    /// Optional fields left empty are not format-checked.
    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut p = complete_profile();
        p.basic_info.email = Some(String::new());
        p.vitals.height = None;
        p.vitals.weight = Some("  ".to_string());

        let report = SchemaValidator::new().validate_profile(&p).unwrap();
        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    #[test]
    fn test_each_list_item_needs_a_name() {
        let mut p = complete_profile();
        p.conditions.current_conditions = vec![Condition::new("ربو"), Condition::new(" ")];
        p.medications.allergies.push(Allergy::default());

        let report = SchemaValidator::new().validate_profile(&p).unwrap();

        assert_eq!(rule_ids(&report), vec!["condition-name", "allergen"]);
        assert!(
            report.failures[0].message.contains("item 2"),
            "failure should name the item: {}",
            report.failures[0].message
        );
    }

    #[test]
    fn test_summary_joins_failures() {
        let report = SchemaValidator::new().validate_report(&SymptomReport::new("", 3)).unwrap();
        assert_eq!(report.summary(), "report-text: describe your symptoms");
    }

    // ── Raw JSON ──────────────────────────────────────────────────────────────

    /// Wrong JSON types are caught structurally before deserialization.
    #[test]
    fn test_raw_profile_json_type_errors() {
        let raw = json!({
            "basicInfo": { "firstName": 42 },
            "conditions": {},
            "medications": {},
            "vitals": {}
        });

        let report = SchemaValidator::new().validate_profile_json(&raw);

        assert!(!report.passed);
        assert!(rule_ids(&report).contains(&"json-schema"), "got {:?}", rule_ids(&report));
    }

    #[test]
    fn test_invalid_json_schema_document_is_a_failure() {
        let schema = ValidationSchema {
            schema_id: "broken".to_string(),
            json_schema: json!({ "type": 12 }),
            rules: vec![],
        };

        let report = validate_value(&json!({}), &schema);

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "json-schema");
    }

    #[test]
    fn test_structural_phase_checks_formats() {
        let schema = ValidationSchema {
            schema_id: "contact".to_string(),
            json_schema: json!({
                "type": "object",
                "properties": { "email": { "type": "string", "format": "email" } }
            }),
            rules: vec![],
        };

        assert!(validate_value(&json!({ "email": "noura@example.com" }), &schema).passed);

        let report = validate_value(&json!({ "email": "noura at example" }), &schema);
        assert_eq!(rule_ids(&report), vec!["json-schema"]);
        assert!(report.failures[0].message.contains("/email"));
    }

    // ── Individual rule types ─────────────────────────────────────────────────

    #[test]
    fn test_email_shapes() {
        let schema = one_rule(ValidationRuleType::Email {
            field_path: "email".to_string(),
        });
        for good in ["a@b.co", "first.last@mail.example.sa", "ops@localhost"] {
            assert!(validate_value(&json!({ "email": good }), &schema).passed, "{good}");
        }
        for bad in ["not-an-email", "@b.com", "a@@b.com", "a b@c.com", "a@b..com", "a@-b.com"] {
            assert!(!validate_value(&json!({ "email": bad }), &schema).passed, "{bad}");
        }
    }

    #[test]
    fn test_range_requires_a_number() {
        let schema = one_rule(ValidationRuleType::Range {
            field_path: "n".to_string(),
            min: 1.0,
            max: 10.0,
        });
        assert!(validate_value(&json!({ "n": 5 }), &schema).passed);
        assert!(!validate_value(&json!({ "n": "5" }), &schema).passed);
        assert!(!validate_value(&json!({}), &schema).passed);
    }

    #[test]
    fn test_nested_path_resolution() {
        let schema = one_rule(ValidationRuleType::NonBlank {
            field_path: "a.b.c".to_string(),
        });
        assert!(validate_value(&json!({ "a": { "b": { "c": "x" } } }), &schema).passed);
        assert!(!validate_value(&json!({ "a": { "b": null } }), &schema).passed);
    }
}
