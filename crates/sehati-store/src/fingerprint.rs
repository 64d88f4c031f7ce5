//! Content fingerprints for saved drafts.
//!
//! Hash input is the compact JSON encoding of the profile. Struct fields
//! serialise in declaration order, so two equal profiles always hash the same.

use sha2::{Digest, Sha256};

use sehati_contracts::{
    error::{SehatiError, SehatiResult},
    profile::MedicalProfile,
};

/// SHA-256 of the profile's JSON encoding, as a lowercase 64-character hex
/// string.
pub fn fingerprint(profile: &MedicalProfile) -> SehatiResult<String> {
    let bytes = serde_json::to_vec(profile).map_err(|e| SehatiError::StorageFailed {
        reason: format!("failed to encode profile: {}", e),
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
