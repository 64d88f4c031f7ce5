//! Sehati — Demo CLI
//!
//! Runs the triage classifier, the profile review and the hospital search
//! from the command line, or the three reference scenarios end to end.
//!
//! Usage:
//!   cargo run -p demo -- triage --text "ألم صدري شديد" --severity 9
//!   cargo run -p demo -- review --profile profile.json --today 2026-10-16
//!   cargo run -p demo -- search --query قلب --lat 24.7136 --lng 46.6753
//!   cargo run -p demo -- --rules my-rules.toml run-all

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    hospital::{GeoPoint, HospitalQuery, SortKey},
    profile::MedicalProfile,
    symptom::{DurationLabel, SymptomReport},
};
use sehati_directory::Directory;
use sehati_ref::{
    mock_data,
    scenarios::{hospital_search, profile_review, triage},
    Runtime,
};
use sehati_rules::RuleTables;
use sehati_validate::SchemaValidator;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Sehati — symptom triage, profile review and hospital search.
#[derive(Parser)]
#[command(
    name = "sehati",
    about = "Sehati triage and recommendation demo",
    long_about = "Classifies symptom reports, reviews medical profiles for emergency flags\n\
                  and suggestions, and searches the hospital directory."
)]
struct Cli {
    /// Rule tables to use instead of the built-in defaults.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a symptom report.
    Triage {
        /// Free-text symptom description.
        #[arg(long)]
        text: String,
        /// Self-rated severity, 1–10.
        #[arg(long)]
        severity: u8,
        /// How long the symptoms have lasted, e.g. "<1h", "1 day" or "أسبوع".
        #[arg(long)]
        duration: Option<String>,
        /// Symptom chips picked alongside the text; repeatable.
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
    },
    /// Compute emergency flags and suggestions for a profile JSON file.
    Review {
        #[arg(long)]
        profile: PathBuf,
        /// Date to compute ages against (YYYY-MM-DD). Defaults to today (UTC).
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Also validate the profile as a completed submission.
        #[arg(long)]
        submit: bool,
    },
    /// Search the hospital directory.
    Search {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        specialty: String,
        #[arg(long = "type", default_value = "")]
        hospital_type: String,
        #[arg(long)]
        emergency: bool,
        #[arg(long, default_value = "")]
        insurance: String,
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,
        #[arg(long, default_value_t = 50.0)]
        max_distance: f64,
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
        #[arg(long, value_enum, default_value_t = Sort::Distance)]
        sort: Sort,
        /// Hospital directory JSON. Defaults to the bundled mock directory.
        #[arg(long)]
        hospitals: Option<PathBuf>,
    },
    /// Run all three reference scenarios in sequence.
    RunAll,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sort {
    Distance,
    Rating,
    Name,
}

impl From<Sort> for SortKey {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Distance => SortKey::Distance,
            Sort::Rating => SortKey::Rating,
            Sort::Name => SortKey::Name,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every rule match.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("sehati: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> SehatiResult<()> {
    let tables = match &cli.rules {
        Some(path) => {
            info!(path = %path.display(), "loading rule tables");
            RuleTables::from_file(path)?
        }
        None => RuleTables::builtin()?,
    };

    match cli.command {
        Command::Triage {
            text,
            severity,
            duration,
            symptoms,
        } => run_triage(&tables, cli.json, text, severity, duration, &symptoms),
        Command::Review { profile, today, submit } => run_review(&tables, cli.json, &profile, today, submit),
        Command::Search {
            query,
            specialty,
            hospital_type,
            emergency,
            insurance,
            min_rating,
            max_distance,
            lat,
            lng,
            sort,
            hospitals,
        } => {
            let query = HospitalQuery {
                text: query,
                specialty,
                hospital_type,
                emergency_only: emergency,
                insurance,
                min_rating,
                max_distance_km: max_distance,
                sort: sort.into(),
            };
            let origin = lat.zip(lng).map(|(lat, lng)| GeoPoint::new(lat, lng));
            run_search(cli.json, &query, origin, hospitals.as_deref())
        }
        Command::RunAll => run_all(&tables),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_triage(
    tables: &RuleTables,
    json: bool,
    text: String,
    severity: u8,
    duration: Option<String>,
    symptoms: &[String],
) -> SehatiResult<()> {
    let mut report = SymptomReport::new(text, severity);
    if let Some(label) = duration {
        let parsed = DurationLabel::parse(&label).ok_or_else(|| SehatiError::InvalidInput {
            reason: format!("unknown duration '{}'", label),
        })?;
        report = report.with_duration(parsed);
    }

    let runtime = Runtime::new(tables);
    let verdict = runtime.assessor.analyze_symptoms(&report, symptoms)?;

    if json {
        return print_json(&verdict);
    }

    println!("{} ({:.0}% confidence)", verdict.urgency, verdict.confidence * 100.0);
    println!("{} ({})", verdict.recommendation, verdict.urgency_window);
    print_list("Why", &verdict.reasons);
    print_list("Next steps", &verdict.next_steps);
    print_list("Seek help if", &verdict.warning_signs);
    Ok(())
}

fn run_review(
    tables: &RuleTables,
    json: bool,
    path: &Path,
    today: Option<NaiveDate>,
    submit: bool,
) -> SehatiResult<()> {
    let raw = std::fs::read_to_string(path).map_err(|e| SehatiError::InvalidInput {
        reason: format!("failed to read profile '{}': {}", path.display(), e),
    })?;
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| SehatiError::InvalidInput {
        reason: format!("profile '{}' is not valid JSON: {}", path.display(), e),
    })?;
    let profile: MedicalProfile = serde_json::from_value(value.clone()).map_err(|e| SehatiError::InvalidInput {
        reason: format!("profile '{}' does not match the profile shape: {}", path.display(), e),
    })?;

    let runtime = Runtime::new(tables);
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let review = runtime.assessor.review_profile(&profile, today);

    if submit {
        let report = SchemaValidator::new().validate_profile_json(&value);
        if !report.passed {
            return Err(SehatiError::ValidationFailed {
                reason: report.summary(),
            });
        }
        runtime.assessor.submit_profile(&profile)?;
    }

    if json {
        return print_json(&review);
    }

    print_list("Emergency flags", &review.flags);
    println!("Suggestions:");
    if review.suggestions.is_empty() {
        println!("  (none)");
    }
    for s in &review.suggestions {
        println!(
            "  {:>3}  {:<10} {}{}",
            s.score,
            s.kind.to_string(),
            s.title,
            if s.urgent { "  [URGENT]" } else { "" }
        );
    }
    if submit {
        println!("Profile accepted.");
    }
    Ok(())
}

fn run_search(
    json: bool,
    query: &HospitalQuery,
    origin: Option<GeoPoint>,
    hospitals: Option<&Path>,
) -> SehatiResult<()> {
    let directory = match hospitals {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| SehatiError::ConfigError {
                reason: format!("failed to read hospital directory '{}': {}", path.display(), e),
            })?;
            Directory::from_json(&raw)?
        }
        None => mock_data::directory()?,
    };

    let matches = directory.search(query, origin);

    if json {
        return print_json(&matches);
    }

    println!("{} hospital(s)", matches.len());
    for m in &matches {
        let distance = match (m.distance_km, m.eta_minutes) {
            (Some(d), Some(eta)) => format!("{:.1} km, ~{} min", d, eta),
            _ => "distance unknown".to_string(),
        };
        println!(
            "  {} ({})  ★{:.1}  {}",
            m.hospital.name_ar, m.hospital.name_en, m.hospital.rating, distance
        );
    }
    Ok(())
}

fn run_all(tables: &RuleTables) -> SehatiResult<()> {
    triage::run_scenario(tables)?;
    profile_review::run_scenario(tables)?;
    hospital_search::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_list(heading: &str, items: &[String]) {
    println!("{}:", heading);
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        println!("  - {}", item);
    }
}

fn print_json<T: Serialize>(value: &T) -> SehatiResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| SehatiError::InvalidInput {
        reason: format!("failed to encode output: {}", e),
    })?;
    println!("{}", out);
    Ok(())
}
