//! Scenario 3: Hospital Search
//!
//! Walk-through:
//!   1. Emergency-capable hospitals near the patient, nearest first
//!   2. A text search for cardiology, sorted by rating, without a location
//!   3. The searches are saved, one hospital is favourited
//!   4. The results are exported as JSON

use serde_json::json;

use sehati_contracts::{
    error::SehatiResult,
    hospital::{HospitalMatch, HospitalQuery, SortKey},
};
use sehati_directory::export_results;
use sehati_store::SearchLog;

use crate::mock_data::{directory, patient_location};

fn print_matches(matches: &[HospitalMatch]) {
    for m in matches {
        let distance = match (m.distance_km, m.eta_minutes) {
            (Some(d), Some(eta)) => format!("{:>6.1} km  ~{} min", d, eta),
            _ => "     -".to_string(),
        };
        println!("    {}  ★{:.1}  {}", distance, m.hospital.rating, m.hospital.name_ar);
    }
}

/// Run Scenario 3: Hospital Search.
pub fn run_scenario() -> SehatiResult<()> {
    println!("=== Scenario 3: Hospital Search ===");
    println!();

    let directory = directory()?;
    let log = SearchLog::new();
    let here = patient_location();
    log.save_location(here)?;

    // ── Nearby emergency departments ──────────────────────────────────────────

    let emergency = HospitalQuery {
        emergency_only: true,
        ..Default::default()
    };
    let nearby = directory.search(&emergency, Some(here));
    println!("  Emergency departments within {} km:", emergency.max_distance_km);
    print_matches(&nearby);
    log.add_search("", json!({ "emergencyOnly": true }), nearby.len())?;
    println!();

    // ── Text search ───────────────────────────────────────────────────────────

    let cardiology = HospitalQuery {
        text: "قلب".to_string(),
        sort: SortKey::Rating,
        ..Default::default()
    };
    let rated = directory.search(&cardiology, None);
    println!("  \"{}\" by rating (no location):", cardiology.text);
    print_matches(&rated);
    log.add_search(&cardiology.text, json!({ "sort": "rating" }), rated.len())?;
    println!();

    // ── Favourites ────────────────────────────────────────────────────────────

    if let Some(top) = rated.first() {
        log.add_favorite(&top.hospital)?;
        println!(
            "  Favourited: {} (favourite: {})",
            top.hospital.name_ar,
            log.is_favorite(&top.hospital.id)?
        );
    }
    println!("  Saved searches: {}", log.searches()?.len());
    println!();

    // ── Export ────────────────────────────────────────────────────────────────

    let exported = export_results(&cardiology.text, &rated);
    println!(
        "  Export: {} hospital(s), {} bytes of JSON",
        exported["totalResults"],
        exported.to_string().len()
    );
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
