//! Scenario 1: Symptom Triage
//!
//! Walk-through:
//!   1. Four reports, one per urgency class, go through `analyze_symptoms`
//!   2. Each verdict is printed with its confidence and urgency window
//!   3. A malformed report is rejected before it reaches the classifier
//!   4. The history log is read back, newest first

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    symptom::SymptomReport,
};
use sehati_rules::RuleTables;

use crate::{mock_data::symptom_reports, Runtime};

/// Run Scenario 1: Symptom Triage.
pub fn run_scenario(tables: &RuleTables) -> SehatiResult<()> {
    println!("=== Scenario 1: Symptom Triage ===");
    println!();

    let runtime = Runtime::new(tables);

    for (report, chips) in symptom_reports() {
        let verdict = runtime.assessor.analyze_symptoms(&report, &chips)?;
        println!("  Report:      \"{}\" (severity {})", report.free_text, report.severity);
        println!(
            "  Verdict:     {} ({:.0}% confidence, {})",
            verdict.urgency,
            verdict.confidence * 100.0,
            verdict.urgency_window
        );
        println!("  Advice:      {}", verdict.recommendation);
        if let Some(step) = verdict.next_steps.first() {
            println!("  First step:  {}", step);
        }
        println!();
    }

    // ── Rejected input ────────────────────────────────────────────────────────

    match runtime.assessor.analyze_symptoms(&SymptomReport::new("", 0), &[]) {
        Err(SehatiError::InvalidInput { reason }) => {
            println!("  Empty report REJECTED: {}", reason);
        }
        Err(other) => return Err(other),
        Ok(verdict) => {
            println!("  Empty report unexpectedly classified as {}", verdict.urgency);
        }
    }
    println!();

    // ── History ───────────────────────────────────────────────────────────────

    let history = runtime.assessor.history(10)?;
    println!("  History ({} entries, newest first):", history.len());
    for entry in &history {
        println!(
            "    {}  {:<10} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.verdict.urgency,
            entry.description
        );
    }
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
