//! Hospital search: filter, measure, sort.
//!
//! Filters run in a fixed order and each one only narrows the list:
//!
//! 1. free text (name in either language, any specialty, district)
//! 2. specialty, type, emergency, insurance, minimum rating
//! 3. distance, only when the caller knows where the patient is
//!
//! Sorting is stable, so hospitals that compare equal keep directory order.

use std::cmp::Ordering;

use tracing::debug;

use sehati_contracts::hospital::{GeoPoint, Hospital, HospitalMatch, HospitalQuery, SortKey};

use crate::geo::{distance_km, eta_minutes};

fn matches_text(hospital: &Hospital, needle: &str) -> bool {
    hospital.name_ar.to_lowercase().contains(needle)
        || hospital.name_en.to_lowercase().contains(needle)
        || hospital.specialties.iter().any(|s| s.to_lowercase().contains(needle))
        || hospital.location.district_ar.to_lowercase().contains(needle)
}

fn passes_filters(hospital: &Hospital, query: &HospitalQuery, needle: &str) -> bool {
    if !needle.is_empty() && !matches_text(hospital, needle) {
        return false;
    }
    if !query.specialty.is_empty() && !hospital.specialties.contains(&query.specialty) {
        return false;
    }
    if !query.hospital_type.is_empty() && hospital.hospital_type != query.hospital_type {
        return false;
    }
    if query.emergency_only && !hospital.emergency_services {
        return false;
    }
    if !query.insurance.is_empty() && !hospital.insurance_accepted.contains(&query.insurance) {
        return false;
    }
    if query.min_rating > 0.0 && hospital.rating < query.min_rating {
        return false;
    }
    true
}

fn compare(a: &HospitalMatch, b: &HospitalMatch, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Distance => a
            .distance_km
            .unwrap_or(0.0)
            .total_cmp(&b.distance_km.unwrap_or(0.0)),
        SortKey::Rating => b.hospital.rating.total_cmp(&a.hospital.rating),
        SortKey::Name => a.hospital.name_ar.cmp(&b.hospital.name_ar),
    }
}

/// Hospitals matching `query`, sorted by `query.sort`.
///
/// With an `origin`, every match carries its distance and ETA and anything
/// farther than `query.max_distance_km` is dropped. Without one, distance
/// fields are `None` and sorting by distance keeps directory order.
pub fn search(hospitals: &[Hospital], query: &HospitalQuery, origin: Option<GeoPoint>) -> Vec<HospitalMatch> {
    let needle = query.text.trim().to_lowercase();

    let mut matches: Vec<HospitalMatch> = hospitals
        .iter()
        .filter(|h| passes_filters(h, query, &needle))
        .filter_map(|h| {
            let distance = origin.map(|o| distance_km(o, h.location.point()));
            if distance.is_some_and(|d| d > query.max_distance_km) {
                return None;
            }
            Some(HospitalMatch {
                hospital: h.clone(),
                distance_km: distance,
                eta_minutes: distance.map(eta_minutes),
            })
        })
        .collect();

    matches.sort_by(|a, b| compare(a, b, query.sort));

    debug!(
        total = hospitals.len(),
        matched = matches.len(),
        sort = ?query.sort,
        located = origin.is_some(),
        "hospital search complete"
    );
    matches
}
