//! Hospital directory records and search queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalLocation {
    pub lat: f64,
    pub lng: f64,
    pub address_ar: String,
    pub district_ar: String,
    pub city_ar: String,
}

impl HospitalLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalContact {
    pub phone: String,
    pub emergency_phone: Option<String>,
    pub website: Option<String>,
}

/// One entry of the hospital directory, in the directory's JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hospital {
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub specialties: Vec<String>,
    pub location: HospitalLocation,
    pub contact: HospitalContact,
    pub services: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub insurance_accepted: Vec<String>,
    pub operating_hours: BTreeMap<String, String>,
    pub emergency_services: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
    Name,
}

/// Filters applied to the directory. Empty strings and zero values mean
/// "no constraint", as in the search screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HospitalQuery {
    pub text: String,
    pub specialty: String,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub emergency_only: bool,
    pub insurance: String,
    pub min_rating: f64,
    /// Only applied when an origin is known.
    pub max_distance_km: f64,
    pub sort: SortKey,
}

impl Default for HospitalQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            specialty: String::new(),
            hospital_type: String::new(),
            emergency_only: false,
            insurance: String::new(),
            min_rating: 0.0,
            max_distance_km: 50.0,
            sort: SortKey::Distance,
        }
    }
}

/// A hospital that passed the query, with distance data when an origin was
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalMatch {
    pub hospital: Hospital,
    pub distance_km: Option<f64>,
    pub eta_minutes: Option<u32>,
}
