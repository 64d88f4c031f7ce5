//! Scenario 2: Profile Review
//!
//! A patient fills in the profile wizard. The session is driven with
//! simulated instants so the timers are visible:
//!   1. Two quick edits: the review waits for the 500 ms quiet period
//!   2. Flags and suggestions are printed once it fires
//!   3. The 8 s autosave writes the draft; a second autosave of the same
//!      content is skipped by fingerprint
//!   4. Submitting the first-step draft fails validation; the complete
//!      profile is accepted

use std::time::{Duration, Instant};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    suggestion::ProfileReview,
};
use sehati_core::ProfileSession;
use sehati_rules::RuleTables;

use crate::{
    mock_data::{complete_profile, first_step_draft, reference_date},
    Runtime,
};

fn print_review(review: &ProfileReview) {
    println!("  Emergency flags ({}):", review.flags.len());
    for flag in &review.flags {
        println!("    ! {}", flag);
    }
    println!("  Suggestions ({}):", review.suggestions.len());
    for s in &review.suggestions {
        println!(
            "    {:>3}  {:<10} {}{}",
            s.score,
            s.kind,
            s.title,
            if s.urgent { "  [URGENT]" } else { "" }
        );
    }
}

/// Run Scenario 2: Profile Review.
pub fn run_scenario(tables: &RuleTables) -> SehatiResult<()> {
    println!("=== Scenario 2: Profile Review ===");
    println!();

    let runtime = Runtime::new(tables);
    let timing = tables.session.timing();
    let today = reference_date();
    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    let mut session = ProfileSession::new(&runtime.assessor, first_step_draft(), timing, t0);

    // ── Debounced review ──────────────────────────────────────────────────────

    session.edit(first_step_draft(), at(100));
    session.edit(complete_profile(), at(300));
    println!("  Edits at 100 ms and 300 ms");

    let tick = session.tick(at(600), today)?;
    println!(
        "  Tick at 600 ms:    review {}",
        match (&tick.review, session.review_pending()) {
            (Some(_), _) => "fired",
            (None, true) => "waiting",
            (None, false) => "idle",
        }
    );

    let tick = session.tick(at(800), today)?;
    match &tick.review {
        Some(review) => {
            println!("  Tick at 800 ms:    review fired");
            print_review(review);
        }
        None => println!("  Tick at 800 ms:    review still waiting"),
    }
    println!();

    // ── Autosave ──────────────────────────────────────────────────────────────

    let tick = session.tick(at(timing.autosave.as_millis() as u64), today)?;
    println!("  Autosave #1:       {}", if tick.saved { "draft written" } else { "skipped" });

    session.edit(complete_profile(), at(9_000));
    let tick = session.tick(at(2 * timing.autosave.as_millis() as u64), today)?;
    println!(
        "  Autosave #2:       {} (same content)",
        if tick.saved { "draft written" } else { "skipped" }
    );
    println!(
        "  Draft fingerprint: {}",
        runtime.profiles.current_fingerprint()?.unwrap_or_default()
    );
    println!();

    // ── Submit ────────────────────────────────────────────────────────────────

    match runtime.assessor.submit_profile(&first_step_draft()) {
        Err(SehatiError::ValidationFailed { reason }) => {
            println!("  Submit first-step draft: REJECTED");
            for failure in reason.split("; ") {
                println!("    - {}", failure);
            }
        }
        Err(other) => return Err(other),
        Ok(()) => println!("  Submit first-step draft: accepted"),
    }

    runtime.assessor.submit_profile(&complete_profile())?;
    println!("  Submit complete profile: ACCEPTED");
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
