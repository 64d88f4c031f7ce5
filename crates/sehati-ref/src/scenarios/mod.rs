//! Reference runtime demo scenarios.
//!
//! Each scenario is a self-contained module that wires real Sehati
//! components (rule tables, validator, stores, directory) to mock patient
//! data and prints what happens at each step.

pub mod hospital_search;
pub mod profile_review;
pub mod triage;
