//! # sehati-rules
//!
//! TOML-driven rule tables and the three decision components built on them.
//!
//! ## Overview
//!
//! - [`KeywordTriageClassifier`] implements
//!   [`TriageClassifier`](sehati_core::traits::TriageClassifier): ordered
//!   urgency tiers, first match wins, fallback when nothing matches.
//! - [`KeywordFlagDetector`] implements
//!   [`FlagDetector`](sehati_core::traits::FlagDetector).
//! - [`CatalogSuggestionGenerator`] implements
//!   [`SuggestionGenerator`](sehati_core::traits::SuggestionGenerator).
//!
//! All three read a [`RuleTables`] value, loaded from the embedded default
//! tables or from a TOML file.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use sehati_rules::{RuleTables, KeywordTriageClassifier};
//!
//! let tables = RuleTables::builtin()?;
//! let classifier = KeywordTriageClassifier::from_tables(&tables);
//! ```

pub mod flags;
pub mod suggest;
pub mod tables;
pub mod triage;

pub use flags::KeywordFlagDetector;
pub use suggest::{CatalogSuggestionGenerator, MAX_SUGGESTIONS};
pub use tables::{RuleTables, SuggestionRule, Trigger, UrgencyPolicy};
pub use triage::KeywordTriageClassifier;

// ── Tests ─────────────────────────────────────────────────────────────────────
