//! Catalogue-driven suggestion generator.
//!
//! Each `SuggestionRule` is evaluated against the profile in declaration
//! order and may fire zero or more times (condition triggers fire once per
//! matching condition). The fired suggestions are then:
//!
//! 1. de-duplicated by id, keeping the first occurrence;
//! 2. stable-sorted by score, highest first, so ties keep firing order;
//! 3. truncated to `MAX_SUGGESTIONS`.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use sehati_contracts::{
    profile::{Condition, MedicalProfile},
    suggestion::Suggestion,
};
use sehati_core::traits::SuggestionGenerator;

use crate::tables::{RuleTables, SuggestionRule, Trigger, UrgencyPolicy};

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

#[derive(Debug, Clone)]
pub struct CatalogSuggestionGenerator {
    rules: Vec<SuggestionRule>,
}

impl CatalogSuggestionGenerator {
    pub fn new(rules: Vec<SuggestionRule>) -> Self {
        Self { rules }
    }

    pub fn from_tables(tables: &RuleTables) -> Self {
        Self::new(tables.suggestions.clone())
    }

    /// Suggestions as of the current UTC date.
    pub fn generate_now(&self, profile: &MedicalProfile) -> Vec<Suggestion> {
        self.generate_suggestions(profile, chrono::Utc::now().date_naive())
    }
}

/// Profile facts every trigger reads, computed once per call.
struct Facts<'p> {
    profile: &'p MedicalProfile,
    age: Option<i32>,
    gender: String,
    bmi: Option<f64>,
}

impl<'p> Facts<'p> {
    fn new(profile: &'p MedicalProfile, today: NaiveDate) -> Self {
        Self {
            profile,
            age: profile.basic_info.age_on(today),
            gender: profile.basic_info.gender.trim().to_lowercase(),
            bmi: profile.vitals.bmi(),
        }
    }

    fn older_than(&self, years: i32) -> bool {
        self.age.is_some_and(|age| age > years)
    }
}

fn mentions(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k.as_str()))
}

fn build(rule: &SuggestionRule, condition: Option<&Condition>) -> Suggestion {
    let urgent = match rule.urgency {
        UrgencyPolicy::Never => false,
        UrgencyPolicy::Always => true,
        UrgencyPolicy::ConditionSevere => condition.is_some_and(Condition::is_severe),
    };
    Suggestion {
        id: rule.id.clone(),
        title: rule.title.clone(),
        kind: rule.kind,
        score: rule.score,
        reasons: rule.reasons.clone(),
        urgent,
    }
}

/// Append every suggestion `rule` produces for `facts` to `out`.
fn fire(rule: &SuggestionRule, facts: &Facts<'_>, out: &mut Vec<Suggestion>) {
    let profile = facts.profile;
    let fired = match &rule.trigger {
        Trigger::AgeOver { years } => facts.older_than(*years),

        Trigger::ConditionKeyword { keywords } => {
            for condition in &profile.conditions.current_conditions {
                if mentions(&condition.name, keywords) {
                    out.push(build(rule, Some(condition)));
                }
            }
            return;
        }

        Trigger::MedicationCountOver { count } => {
            profile.medications.current_medications.len() > *count
        }

        Trigger::SevereAllergy => profile.medications.allergies.iter().any(|a| a.is_severe()),

        Trigger::FamilyHistoryKeyword { keywords } => profile
            .conditions
            .family_history
            .iter()
            .any(|entry| mentions(&entry.condition, keywords)),

        Trigger::GenderAgeOver { genders, years } => {
            genders.iter().any(|g| *g == facts.gender) && facts.older_than(*years)
        }

        Trigger::BmiOver { threshold } => facts.bmi.is_some_and(|bmi| bmi > *threshold),
    };

    if fired {
        out.push(build(rule, None));
    }
}

impl SuggestionGenerator for CatalogSuggestionGenerator {
    fn generate_suggestions(&self, profile: &MedicalProfile, today: NaiveDate) -> Vec<Suggestion> {
        let facts = Facts::new(profile, today);
        if facts.age.is_none() {
            debug!("date of birth missing or unparsable; age rules skipped");
        }

        let mut fired = Vec::new();
        for rule in &self.rules {
            fire(rule, &facts, &mut fired);
        }

        let mut seen = HashSet::new();
        let mut suggestions: Vec<Suggestion> = fired
            .into_iter()
            .filter(|s| seen.insert(s.id.clone()))
            .collect();

        // `sort_by` is stable: equal scores keep firing order.
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(MAX_SUGGESTIONS);

        debug!(count = suggestions.len(), "suggestions generated");
        suggestions
    }
}
