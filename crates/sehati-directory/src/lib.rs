//! # sehati-directory
//!
//! The hospital directory behind the search screen.
//!
//! [`search`] narrows a hospital list by text and filters, attaches distance
//! and a rough ETA when the patient's location is known, and sorts the result.
//! [`Directory`] wraps a loaded hospital list and adds lookup and export.

pub mod geo;
pub mod search;

use chrono::Utc;
use serde_json::{json, Value};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    hospital::{GeoPoint, Hospital, HospitalMatch, HospitalQuery},
};

pub use geo::{distance_km, eta_minutes, EARTH_RADIUS_KM};
pub use search::search;

/// A loaded hospital list.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    hospitals: Vec<Hospital>,
}

impl Directory {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    /// Parse a JSON array of hospitals.
    pub fn from_json(s: &str) -> SehatiResult<Self> {
        let hospitals = serde_json::from_str(s).map_err(|e| SehatiError::ConfigError {
            reason: format!("failed to parse hospital directory: {}", e),
        })?;
        Ok(Self::new(hospitals))
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn get(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    pub fn search(&self, query: &HospitalQuery, origin: Option<GeoPoint>) -> Vec<HospitalMatch> {
        search(&self.hospitals, query, origin)
    }
}

/// The downloadable summary of a result list.
pub fn export_results(query: &str, matches: &[HospitalMatch]) -> Value {
    json!({
        "query": query,
        "timestamp": Utc::now().to_rfc3339(),
        "totalResults": matches.len(),
        "hospitals": matches.iter().map(|m| json!({
            "name_ar": m.hospital.name_ar,
            "name_en": m.hospital.name_en,
            "rating": m.hospital.rating,
            "specialties": m.hospital.specialties,
            "phone": m.hospital.contact.phone,
            "address_ar": m.hospital.location.address_ar,
            "distance": m.distance_km,
            "eta": m.eta_minutes,
            "services": m.hospital.services,
            "insurance": m.hospital.insurance_accepted,
        })).collect::<Vec<_>>(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sehati_contracts::{
        error::SehatiError,
        hospital::{GeoPoint, Hospital, HospitalLocation, HospitalQuery, SortKey},
    };

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Central Riyadh.
    const ORIGIN: GeoPoint = GeoPoint { lat: 24.7136, lng: 46.6753 };

    fn hospital(id: &str, name_ar: &str, rating: f64, lat: f64, lng: f64) -> Hospital {
        Hospital {
            id: id.to_string(),
            name_ar: name_ar.to_string(),
            name_en: format!("{id} Hospital"),
            hospital_type: "government".to_string(),
            specialties: vec!["طب عام".to_string()],
            location: HospitalLocation {
                lat,
                lng,
                district_ar: "العليا".to_string(),
                ..Default::default()
            },
            rating,
            ..Default::default()
        }
    }

    fn directory() -> Vec<Hospital> {
        let mut near = hospital("near", "مستشفى ب", 4.0, 24.72, 46.68);
        near.specialties.push("قلب".to_string());
        near.emergency_services = true;
        near.insurance_accepted = vec!["بوبا".to_string()];

        let mut mid = hospital("mid", "مستشفى أ", 4.8, 24.80, 46.70);
        mid.hospital_type = "private".to_string();
        mid.location.district_ar = "الملقا".to_string();

        let mut far = hospital("far", "مستشفى ج", 4.5, 21.54, 39.17);
        far.emergency_services = true;

        vec![near, mid, far]
    }

    fn ids(matches: &[HospitalMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.hospital.id.as_str()).collect()
    }

    // ── Geometry ──────────────────────────────────────────────────────────────

    #[test]
    fn test_distance_zero_and_symmetric() {
        let jeddah = GeoPoint::new(21.5433, 39.1728);
        assert_eq!(distance_km(ORIGIN, ORIGIN), 0.0);
        let there = distance_km(ORIGIN, jeddah);
        let back = distance_km(jeddah, ORIGIN);
        assert!((there - back).abs() < 1e-9);
        // Riyadh to Jeddah is roughly 850 km as the crow flies.
        assert!((800.0..900.0).contains(&there), "got {there}");
    }

    #[test]
    fn test_eta_rounds_two_minutes_per_km() {
        assert_eq!(eta_minutes(0.0), 0);
        assert_eq!(eta_minutes(1.2), 2);
        assert_eq!(eta_minutes(1.3), 3);
        assert_eq!(eta_minutes(10.0), 20);
    }

    // ── Filters ───────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let result = search(&directory(), &HospitalQuery::default(), None);
        assert_eq!(ids(&result), vec!["near", "mid", "far"]);
        assert!(result.iter().all(|m| m.distance_km.is_none() && m.eta_minutes.is_none()));
    }

    #[test]
    fn test_text_matches_names_specialty_and_district() {
        let query = |text: &str| HospitalQuery {
            text: text.to_string(),
            ..Default::default()
        };
        let hospitals = directory();

        assert_eq!(ids(&search(&hospitals, &query("  MID hospital "), None)), vec!["mid"]);
        assert_eq!(ids(&search(&hospitals, &query("قلب"), None)), vec!["near"]);
        assert_eq!(ids(&search(&hospitals, &query("الملقا"), None)), vec!["mid"]);
        assert!(search(&hospitals, &query("nothing like this"), None).is_empty());
    }

    #[test]
    fn test_exact_filters() {
        let hospitals = directory();

        let q = HospitalQuery {
            hospital_type: "private".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search(&hospitals, &q, None)), vec!["mid"]);

        let q = HospitalQuery {
            emergency_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&search(&hospitals, &q, None)), vec!["near", "far"]);

        let q = HospitalQuery {
            insurance: "بوبا".to_string(),
            specialty: "قلب".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search(&hospitals, &q, None)), vec!["near"]);

        // Specialty is an exact match, not a substring.
        let q = HospitalQuery {
            specialty: "طب".to_string(),
            ..Default::default()
        };
        assert!(search(&hospitals, &q, None).is_empty());
    }

    #[test]
    fn test_min_rating_inclusive() {
        let q = HospitalQuery {
            min_rating: 4.5,
            ..Default::default()
        };
        assert_eq!(ids(&search(&directory(), &q, None)), vec!["mid", "far"]);
    }

    // ── Distance ──────────────────────────────────────────────────────────────

    #[test]
    fn test_origin_adds_distance_and_drops_far_hospitals() {
        let result = search(&directory(), &HospitalQuery::default(), Some(ORIGIN));

        assert_eq!(ids(&result), vec!["near", "mid"]);
        for m in &result {
            let d = m.distance_km.unwrap();
            assert!(d <= 50.0);
            assert_eq!(m.eta_minutes, Some(eta_minutes(d)));
        }
    }

    #[test]
    fn test_max_distance_is_configurable() {
        let q = HospitalQuery {
            max_distance_km: 2000.0,
            ..Default::default()
        };
        assert_eq!(ids(&search(&directory(), &q, Some(ORIGIN))), vec!["near", "mid", "far"]);

        let q = HospitalQuery {
            max_distance_km: 1.0,
            ..Default::default()
        };
        assert_eq!(ids(&search(&directory(), &q, Some(ORIGIN))), vec!["near"]);

        let q = HospitalQuery {
            max_distance_km: 0.5,
            ..Default::default()
        };
        assert!(search(&directory(), &q, Some(ORIGIN)).is_empty());
    }

    // ── Sorting ───────────────────────────────────────────────────────────────

    #[test]
    fn test_sort_keys() {
        let hospitals = directory();
        let sorted = |sort: SortKey| {
            let q = HospitalQuery {
                sort,
                max_distance_km: 2000.0,
                ..Default::default()
            };
            ids(&search(&hospitals, &q, Some(ORIGIN)))
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        };

        assert_eq!(sorted(SortKey::Distance), vec!["near", "mid", "far"]);
        assert_eq!(sorted(SortKey::Rating), vec!["mid", "far", "near"]);
        assert_eq!(sorted(SortKey::Name), vec!["mid", "near", "far"]);
    }

    /// Equal ratings keep directory order.
    #[test]
    fn test_rating_sort_is_stable() {
        let hospitals = vec![
            hospital("a", "أ", 4.0, 0.0, 0.0),
            hospital("b", "ب", 4.0, 0.0, 0.0),
            hospital("c", "ج", 4.9, 0.0, 0.0),
        ];
        let q = HospitalQuery {
            sort: SortKey::Rating,
            ..Default::default()
        };
        assert_eq!(ids(&search(&hospitals, &q, None)), vec!["c", "a", "b"]);
    }

    // ── Directory ─────────────────────────────────────────────────────────────

    #[test]
    fn test_directory_from_json() {
        let json = r#"[
            { "id": "h1", "name_ar": "مستشفى", "name_en": "Hospital", "type": "government",
              "specialties": ["عيون"], "rating": 4.2, "emergency_services": true,
              "location": { "lat": 24.7, "lng": 46.7, "district_ar": "الملز" } }
        ]"#;

        let dir = Directory::from_json(json).unwrap();
        assert_eq!(dir.hospitals().len(), 1);
        assert_eq!(dir.get("h1").map(|h| h.hospital_type.as_str()), Some("government"));
        assert!(dir.get("h2").is_none());

        let q = HospitalQuery {
            text: "عيون".to_string(),
            ..Default::default()
        };
        assert_eq!(dir.search(&q, None).len(), 1);
    }

    #[test]
    fn test_directory_bad_json() {
        match Directory::from_json("{ oops") {
            Err(SehatiError::ConfigError { reason }) => {
                assert!(reason.contains("hospital directory"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_export_results_shape() {
        let matches = search(&directory(), &HospitalQuery::default(), Some(ORIGIN));
        let exported = export_results("قلب", &matches);

        assert_eq!(exported["query"], "قلب");
        assert_eq!(exported["totalResults"], 2);
        assert_eq!(exported["hospitals"][0]["name_ar"], "مستشفى ب");
        assert!(exported["hospitals"][0]["distance"].is_number());
    }
}
