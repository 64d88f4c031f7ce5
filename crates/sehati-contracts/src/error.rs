//! Error types for the Sehati core.
//!
//! The decision components are total functions and never fail. Errors only
//! arise at the edges: rejected input, rule-table configuration, validation
//! of a submitted profile, and the storage collaborators.

use thiserror::Error;

/// The unified error type for the Sehati crates.
#[derive(Debug, Error)]
pub enum SehatiError {
    /// The caller handed over input the decision core cannot accept
    /// (e.g. a blank symptom description).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A submitted profile did not pass validation.
    #[error("profile validation failed: {reason}")]
    ValidationFailed { reason: String },

    /// A rule table or other configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A profile draft or history entry could not be persisted or read back.
    ///
    /// Treated as fatal by the assessor: a triage that cannot be logged is
    /// reported to the caller instead of being silently dropped.
    #[error("storage failed: {reason}")]
    StorageFailed { reason: String },

    /// A JSON Schema document could not be compiled or applied.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },
}

/// Convenience alias used throughout the Sehati crates.
pub type SehatiResult<T> = Result<T, SehatiError>;
