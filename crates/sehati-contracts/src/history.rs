//! Records kept by the local history stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    hospital::Hospital,
    symptom::{DurationLabel, TriageVerdict},
};

/// One past symptom analysis, as shown in the history sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    pub id: Uuid,
    /// Symptom chips the patient selected alongside the free text.
    pub symptoms: Vec<String>,
    pub description: String,
    pub severity: u8,
    pub duration: Option<DurationLabel>,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "triageResult")]
    pub verdict: TriageVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: Uuid,
    pub query: String,
    /// The filter set as the search screen serialised it.
    pub filters: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    pub results_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteHospital {
    pub id: String,
    pub name_ar: String,
    pub rating: f64,
    pub specialties: Vec<String>,
    pub phone: String,
    pub address_ar: String,
    pub saved_at: DateTime<Utc>,
}

impl FavoriteHospital {
    /// Snapshot the fields the favourites list displays.
    pub fn from_hospital(hospital: &Hospital, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: hospital.id.clone(),
            name_ar: hospital.name_ar.clone(),
            rating: hospital.rating,
            specialties: hospital.specialties.clone(),
            phone: hospital.contact.phone.clone(),
            address_ar: hospital.location.address_ar.clone(),
            saved_at,
        }
    }
}
