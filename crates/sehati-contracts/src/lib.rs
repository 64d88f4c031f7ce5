//! # sehati-contracts
//!
//! Shared types, schemas, and contracts for the Sehati triage and
//! recommendation core.
//!
//! All crates in the workspace import from here. Apart from parsing the
//! free-text measurements and dates the profile form produces, no business
//! logic lives in this crate.

pub mod error;
pub mod history;
pub mod hospital;
pub mod profile;
pub mod suggestion;
pub mod symptom;
pub mod validate;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use error::SehatiError;
    use profile::{parse_measurement, BasicInfo, MedicalProfile, Severity, Vitals};
    use symptom::{DurationLabel, SymptomReport, UrgencyClass};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn born(dob: &str) -> BasicInfo {
        BasicInfo {
            date_of_birth: dob.to_string(),
            ..BasicInfo::default()
        }
    }

    // ── Profile defaults ─────────────────────────────────────────────────────

    #[test]
    fn empty_json_profile_has_empty_lists() {
        let profile: MedicalProfile = serde_json::from_str("{}").unwrap();

        assert!(profile.conditions.current_conditions.is_empty());
        assert!(profile.conditions.family_history.is_empty());
        assert!(profile.medications.current_medications.is_empty());
        assert!(profile.medications.allergies.is_empty());
        assert!(profile.vitals.weight.is_none());
        assert_eq!(profile, MedicalProfile::default());
    }

    #[test]
    fn partial_profile_from_form_json() {
        let json = r#"{
            "basicInfo": { "firstName": "Sara", "gender": "female" },
            "conditions": {
                "currentConditions": [ { "name": "سكري", "severity": "شديد" } ]
            },
            "medications": {
                "allergies": [ { "allergen": "penicillin", "severity": "severe" } ]
            },
            "vitals": { "weight": "82" }
        }"#;

        let profile: MedicalProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.basic_info.first_name, "Sara");
        assert_eq!(profile.conditions.current_conditions.len(), 1);
        assert_eq!(
            profile.conditions.current_conditions[0].severity,
            Some(Severity::Severe)
        );
        assert!(profile.medications.allergies[0].is_severe());
        assert!(profile.conditions.past_surgeries.is_empty());
        assert_eq!(profile.vitals.weight_kg(), Some(82.0));
    }

    #[test]
    fn blank_or_unknown_severity_reads_as_absent() {
        let json = r#"{
            "conditions": {
                "currentConditions": [
                    { "name": "ربو", "severity": "" },
                    { "name": "سكري", "severity": "critical" },
                    { "name": "ضغط", "severity": " Severe " }
                ]
            },
            "medications": { "allergies": [ { "allergen": "dust", "severity": "" } ] }
        }"#;

        let profile: MedicalProfile = serde_json::from_str(json).unwrap();
        let severities: Vec<_> = profile
            .conditions
            .current_conditions
            .iter()
            .map(|c| c.severity)
            .collect();

        assert_eq!(severities, vec![None, None, Some(Severity::Severe)]);
        assert_eq!(profile.medications.allergies[0].severity, None);
        assert_eq!(Severity::parse("متوسط"), Some(Severity::Moderate));
    }

    // ── Measurements ─────────────────────────────────────────────────────────

    #[test]
    fn measurement_reads_leading_number() {
        assert_eq!(parse_measurement("70"), Some(70.0));
        assert_eq!(parse_measurement(" 72.5 kg"), Some(72.5));
        assert_eq!(parse_measurement("180cm"), Some(180.0));
        assert_eq!(parse_measurement("80."), Some(80.0));
    }

    #[test]
    fn measurement_rejects_non_numbers() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert_eq!(parse_measurement("heavy"), None);
        assert_eq!(parse_measurement("kg 70"), None);
        assert_eq!(parse_measurement("-"), None);
    }

    #[test]
    fn bmi_needs_both_measurements() {
        let vitals = Vitals {
            height: Some("170".to_string()),
            weight: Some("95".to_string()),
            ..Vitals::default()
        };
        let bmi = vitals.bmi().unwrap();
        assert!((bmi - 32.87).abs() < 0.01, "unexpected bmi {bmi}");

        let no_height = Vitals {
            weight: Some("95".to_string()),
            ..Vitals::default()
        };
        assert_eq!(no_height.bmi(), None);

        let zero_height = Vitals {
            height: Some("0".to_string()),
            weight: Some("95".to_string()),
            ..Vitals::default()
        };
        assert_eq!(zero_height.bmi(), None);
    }

    // ── Age ──────────────────────────────────────────────────────────────────

    #[test]
    fn age_counts_full_years() {
        let info = born("1985-06-15");
        assert_eq!(info.age_on(date(2026, 6, 14)), Some(40));
        assert_eq!(info.age_on(date(2026, 6, 15)), Some(41));
        assert_eq!(info.age_on(date(2026, 12, 1)), Some(41));
    }

    #[test]
    fn age_accepts_timestamps_and_rejects_garbage() {
        assert_eq!(
            born("1990-01-02T00:00:00Z").age_on(date(2026, 1, 2)),
            Some(36)
        );
        assert_eq!(born("").age_on(date(2026, 1, 1)), None);
        assert_eq!(born("last spring").age_on(date(2026, 1, 1)), None);
    }

    // ── Symptom types ────────────────────────────────────────────────────────

    #[test]
    fn duration_labels_accept_both_languages() {
        let english: DurationLabel = serde_json::from_str(r#""several days""#).unwrap();
        let arabic: DurationLabel = serde_json::from_str(r#""عدة أيام""#).unwrap();
        assert_eq!(english, DurationLabel::SeveralDays);
        assert_eq!(arabic, DurationLabel::SeveralDays);
        assert_eq!(DurationLabel::parse(">1 week"), Some(DurationLabel::OverAWeek));
        assert_eq!(DurationLabel::parse(" أسبوع "), Some(DurationLabel::OneWeek));
        assert_eq!(DurationLabel::parse("أقل من ساعة"), Some(DurationLabel::UnderAnHour));
        assert_eq!(DurationLabel::parse("forever"), None);
        for label in DurationLabel::ALL {
            assert_eq!(DurationLabel::parse(label.as_arabic()), Some(label));
        }
    }

    #[test]
    fn symptom_report_wire_shape() {
        let report: SymptomReport = serde_json::from_str(
            r#"{ "freeText": "cough", "severity": 4, "durationLabel": "1 day" }"#,
        )
        .unwrap();
        assert_eq!(
            report,
            SymptomReport::new("cough", 4).with_duration(DurationLabel::OneDay)
        );
    }

    #[test]
    fn urgency_orders_most_urgent_first() {
        let mut classes = vec![
            UrgencyClass::SelfCare,
            UrgencyClass::Emergency,
            UrgencyClass::Routine,
            UrgencyClass::Urgent,
        ];
        classes.sort();
        assert_eq!(
            classes,
            vec![
                UrgencyClass::Emergency,
                UrgencyClass::Urgent,
                UrgencyClass::Routine,
                UrgencyClass::SelfCare,
            ]
        );
        assert_eq!(UrgencyClass::SelfCare.to_string(), "SELF_CARE");
    }

    // ── SehatiError display messages ─────────────────────────────────────────

    #[test]
    fn error_invalid_input_display() {
        let err = SehatiError::InvalidInput {
            reason: "symptom description is blank".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("blank"));
    }

    #[test]
    fn error_config_error_display() {
        let err = SehatiError::ConfigError {
            reason: "missing triage tiers".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing triage tiers"));
    }

    #[test]
    fn error_storage_failed_display() {
        let err = SehatiError::StorageFailed {
            reason: "lock poisoned".to_string(),
        };
        assert!(err.to_string().contains("storage failed: lock poisoned"));
    }
}
