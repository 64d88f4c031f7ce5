//! Built-in validation schemas for symptom reports and medical profiles.
//!
//! Field paths use the camelCase JSON names the form layer produces.

use serde_json::json;

use sehati_contracts::validate::{ValidationRule, ValidationRuleType, ValidationSchema};

fn rule(id: &str, message: &str, rule_type: ValidationRuleType) -> ValidationRule {
    ValidationRule {
        rule_id: id.to_string(),
        message: message.to_string(),
        rule_type,
    }
}

fn non_blank(id: &str, path: &str, message: &str) -> ValidationRule {
    rule(
        id,
        message,
        ValidationRuleType::NonBlank {
            field_path: path.to_string(),
        },
    )
}

fn each_non_blank(id: &str, path: &str, item: &str, message: &str) -> ValidationRule {
    rule(
        id,
        message,
        ValidationRuleType::EachNonBlank {
            field_path: path.to_string(),
            item_field: item.to_string(),
        },
    )
}

/// Symptom report: non-blank text and a severity on the 1–10 scale.
pub fn symptom_report_schema() -> ValidationSchema {
    ValidationSchema {
        schema_id: "symptom-report-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": ["freeText", "severity"],
            "properties": {
                "freeText": { "type": "string" },
                "severity": { "type": "integer" },
                "durationLabel": { "type": ["string", "null"] }
            }
        }),
        rules: vec![
            non_blank("report-text", "freeText", "describe your symptoms"),
            rule(
                "report-severity",
                "severity must be between 1 and 10",
                ValidationRuleType::Range {
                    field_path: "severity".to_string(),
                    min: 1.0,
                    max: 10.0,
                },
            ),
        ],
    }
}

/// Complete medical profile, checked on submit.
pub fn medical_profile_schema() -> ValidationSchema {
    let list = json!({ "type": "array" });
    ValidationSchema {
        schema_id: "medical-profile-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "required": ["basicInfo", "conditions", "medications", "vitals"],
            "properties": {
                "basicInfo": {
                    "type": "object",
                    "required": ["firstName", "lastName", "dateOfBirth", "gender", "phone", "emergencyContact"],
                    "properties": {
                        "firstName": { "type": "string" },
                        "lastName": { "type": "string" },
                        "dateOfBirth": { "type": "string" },
                        "gender": { "type": "string" },
                        "phone": { "type": "string" },
                        "email": { "type": ["string", "null"] },
                        "emergencyContact": { "type": "object" }
                    }
                },
                "conditions": {
                    "type": "object",
                    "properties": {
                        "currentConditions": list,
                        "pastSurgeries": list,
                        "familyHistory": list
                    }
                },
                "medications": {
                    "type": "object",
                    "properties": {
                        "currentMedications": list,
                        "allergies": list,
                        "supplements": list
                    }
                },
                "vitals": {
                    "type": "object",
                    "properties": {
                        "height": { "type": ["string", "null"] },
                        "weight": { "type": ["string", "null"] },
                        "recentTests": list
                    }
                }
            }
        }),
        rules: vec![
            non_blank("first-name", "basicInfo.firstName", "first name is required"),
            non_blank("last-name", "basicInfo.lastName", "last name is required"),
            rule(
                "date-of-birth",
                "date of birth is required",
                ValidationRuleType::Date {
                    field_path: "basicInfo.dateOfBirth".to_string(),
                },
            ),
            non_blank("gender", "basicInfo.gender", "gender is required"),
            rule(
                "phone",
                "phone number is not valid",
                ValidationRuleType::MinLength {
                    field_path: "basicInfo.phone".to_string(),
                    min: 10,
                },
            ),
            rule(
                "email",
                "e-mail address is not valid",
                ValidationRuleType::Email {
                    field_path: "basicInfo.email".to_string(),
                },
            ),
            non_blank(
                "emergency-contact-name",
                "basicInfo.emergencyContact.name",
                "emergency contact name is required",
            ),
            rule(
                "emergency-contact-phone",
                "emergency contact phone is not valid",
                ValidationRuleType::MinLength {
                    field_path: "basicInfo.emergencyContact.phone".to_string(),
                    min: 10,
                },
            ),
            non_blank(
                "emergency-contact-relationship",
                "basicInfo.emergencyContact.relationship",
                "relationship is required",
            ),
            each_non_blank("condition-name", "conditions.currentConditions", "name", "condition name is required"),
            each_non_blank("surgery-name", "conditions.pastSurgeries", "name", "surgery name is required"),
            each_non_blank("family-condition", "conditions.familyHistory", "condition", "condition is required"),
            each_non_blank("family-relation", "conditions.familyHistory", "relation", "relation is required"),
            each_non_blank(
                "medication-name",
                "medications.currentMedications",
                "name",
                "medication name is required",
            ),
            each_non_blank("allergen", "medications.allergies", "allergen", "allergen is required"),
            each_non_blank("supplement-name", "medications.supplements", "name", "supplement name is required"),
            rule(
                "height",
                "height must be a number",
                ValidationRuleType::Numeric {
                    field_path: "vitals.height".to_string(),
                },
            ),
            rule(
                "weight",
                "weight must be a number",
                ValidationRuleType::Numeric {
                    field_path: "vitals.weight".to_string(),
                },
            ),
            each_non_blank("test-name", "vitals.recentTests", "testName", "test name is required"),
            each_non_blank("specialist-name", "supporters.specialists", "name", "doctor name is required"),
        ],
    }
}
