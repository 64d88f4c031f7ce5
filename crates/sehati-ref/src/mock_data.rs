//! Simulated patient and directory data for the Sehati reference runtime.
//!
//! All data in this module is hardcoded and fictional. No external systems are
//! contacted.

use chrono::NaiveDate;

use sehati_contracts::{
    error::SehatiResult,
    hospital::GeoPoint,
    profile::{
        Allergy, Condition, Doctor, EmergencyContact, FamilyHistoryEntry, MedicalProfile, Medication,
        Severity, Supporters,
    },
    symptom::{DurationLabel, SymptomReport},
};
use sehati_directory::Directory;

/// Five fictional hospitals in Riyadh and Jeddah.
const HOSPITALS_JSON: &str = include_str!("../data/hospitals.json");

pub fn directory() -> SehatiResult<Directory> {
    Directory::from_json(HOSPITALS_JSON)
}

/// Olaya, central Riyadh.
pub fn patient_location() -> GeoPoint {
    GeoPoint::new(24.7136, 46.6753)
}

/// Fixed "today" so scenario output does not drift with the calendar.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
}

// ── Symptom reports ───────────────────────────────────────────────────────────

/// Reports covering every urgency class, with the symptom chips picked
/// alongside each.
pub fn symptom_reports() -> Vec<(SymptomReport, Vec<String>)> {
    vec![
        (
            SymptomReport::new("ألم صدري شديد مع تعرق", 9).with_duration(DurationLabel::UnderAnHour),
            vec!["ألم في الصدر".to_string(), "تعرق".to_string()],
        ),
        (
            SymptomReport::new("حمى عالية منذ الصباح", 5).with_duration(DurationLabel::FewHours),
            vec!["حمى".to_string()],
        ),
        (
            SymptomReport::new("سعال جاف", 2).with_duration(DurationLabel::SeveralDays),
            vec!["سعال".to_string()],
        ),
        (SymptomReport::new("صداع خفيف", 2), vec!["صداع".to_string()]),
    ]
}

// ── Profiles ──────────────────────────────────────────────────────────────────

/// The draft as it stands after the first wizard step: basic info only.
pub fn first_step_draft() -> MedicalProfile {
    let mut p = MedicalProfile::default();
    p.basic_info.first_name = "مريم".to_string();
    p.basic_info.last_name = "الحربي".to_string();
    p.basic_info.date_of_birth = "1979-05-02".to_string();
    p.basic_info.gender = "أنثى".to_string();
    p
}

/// A fully completed profile: 47-year-old woman with severe diabetes,
/// on insulin, with a severe penicillin allergy.
pub fn complete_profile() -> MedicalProfile {
    let mut p = first_step_draft();
    p.basic_info.phone = "0551234567".to_string();
    p.basic_info.email = Some("mariam@example.com".to_string());
    p.basic_info.emergency_contact = EmergencyContact {
        name: "عبدالله الحربي".to_string(),
        phone: "0557654321".to_string(),
        relationship: "زوج".to_string(),
    };

    p.conditions.current_conditions = vec![
        Condition::new("سكري النوع الثاني").with_severity(Severity::Severe),
        Condition::new("ارتفاع ضغط الدم").with_severity(Severity::Moderate),
    ];
    p.conditions.family_history.push(FamilyHistoryEntry {
        condition: "أمراض القلب".to_string(),
        relation: "الأب".to_string(),
        notes: None,
    });

    p.medications.current_medications = vec![Medication::new("أنسولين"), Medication::new("ميتفورمين")];
    p.medications.allergies.push(Allergy {
        allergen: "بنسلين".to_string(),
        reaction: Some("طفح جلدي".to_string()),
        severity: Some(Severity::Severe),
    });

    p.vitals.height = Some("158".to_string());
    p.vitals.weight = Some("82".to_string());
    p.vitals.blood_type = Some("O+".to_string());

    p.supporters = Supporters {
        primary_doctor: Some(Doctor {
            name: "د. سلمان القحطاني".to_string(),
            specialty: Some("طب الأسرة".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    p
}
