//! Emergency flag detection.
//!
//! Rules run independently and every match is emitted, in this order:
//! conditions (high-risk name, then severe, per condition in list order),
//! medications, allergies, weight. Nothing is de-duplicated.

use tracing::debug;

use sehati_contracts::{profile::MedicalProfile, suggestion::EmergencyFlagSet};
use sehati_core::traits::FlagDetector;

use crate::tables::{FlagTables, RuleTables};

#[derive(Debug, Clone)]
pub struct KeywordFlagDetector {
    tables: FlagTables,
}

impl KeywordFlagDetector {
    pub fn new(tables: FlagTables) -> Self {
        Self { tables }
    }

    pub fn from_tables(tables: &RuleTables) -> Self {
        Self::new(tables.flags.clone())
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

impl FlagDetector for KeywordFlagDetector {
    fn detect_flags(&self, profile: &MedicalProfile) -> EmergencyFlagSet {
        let t = &self.tables;
        let msg = &t.messages;
        let mut flags = EmergencyFlagSet::new();

        for condition in &profile.conditions.current_conditions {
            if contains_any(&condition.name, &t.high_risk_conditions) {
                flags.push(msg.high_risk_condition.replace("{name}", &condition.name));
            }
            if condition.is_severe() {
                flags.push(msg.severe_condition.replace("{name}", &condition.name));
            }
        }

        for medication in &profile.medications.current_medications {
            if contains_any(&medication.name, &t.critical_medications) {
                flags.push(msg.critical_medication.replace("{name}", &medication.name));
            }
        }

        for allergy in &profile.medications.allergies {
            if allergy.is_severe() {
                flags.push(msg.severe_allergy.replace("{allergen}", &allergy.allergen));
            }
        }

        match (&profile.vitals.weight, profile.vitals.weight_kg()) {
            (_, Some(weight)) if weight > t.high_weight_kg => flags.push(msg.high_weight.clone()),
            (_, Some(weight)) if weight < t.low_weight_kg => flags.push(msg.low_weight.clone()),
            (Some(raw), None) if !raw.trim().is_empty() => {
                debug!(weight = %raw, "weight is not a number; weight check skipped");
            }
            _ => {}
        }

        debug!(count = flags.len(), "emergency flags detected");
        flags
    }
}
