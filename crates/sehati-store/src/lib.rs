//! # sehati-store
//!
//! In-memory local stores for the Sehati client.
//!
//! ## Overview
//!
//! - [`InMemoryProfileStore`] implements
//!   [`ProfileRepository`](sehati_core::traits::ProfileRepository). Drafts
//!   are fingerprinted with SHA-256 so an autosave of an unchanged draft is
//!   skipped.
//! - [`InMemoryHistoryLog`] implements
//!   [`HistoryLog`](sehati_core::traits::HistoryLog), newest entry first,
//!   capped at [`HISTORY_CAPACITY`].
//! - [`SearchLog`] keeps saved searches, favourite hospitals and the last
//!   location, and round-trips through a single JSON document.
//!
//! All stores keep their state behind `Arc<Mutex<_>>`; clones share state.
//! A poisoned lock surfaces as `SehatiError::StorageFailed`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sehati_store::InMemoryProfileStore;
//! use sehati_core::traits::ProfileRepository;
//!
//! let store = InMemoryProfileStore::new();
//! assert!(store.save_profile(&draft)?);
//! assert!(!store.save_profile(&draft)?); // unchanged
//! ```

pub mod fingerprint;
pub mod history;
pub mod profile;
pub mod search;

pub use fingerprint::fingerprint;
pub use history::{InMemoryHistoryLog, HISTORY_CAPACITY};
pub use profile::InMemoryProfileStore;
pub use search::{SearchData, SearchLog, MAX_SAVED_SEARCHES};

// ── Tests ─────────────────────────────────────────────────────────────────────
