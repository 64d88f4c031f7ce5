//! # sehati-core
//!
//! The decision pipeline of the Sehati triage and recommendation core.
//!
//! This crate provides:
//! - The decision traits (`TriageClassifier`, `FlagDetector`,
//!   `SuggestionGenerator`) and their collaborators (`InputValidator`,
//!   `ProfileRepository`, `HistoryLog`)
//! - The `Assessor` that wires them together at the caller boundary
//! - The debounce/autosave policy the profile screen runs on
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sehati_core::{Assessor, traits::{TriageClassifier, FlagDetector, SuggestionGenerator}};
//! ```

pub mod assessor;
pub mod session;
pub mod traits;

pub use assessor::Assessor;
pub use session::{ProfileSession, SessionTiming};
