//! Outputs of the profile-driven components: emergency flags and suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable warnings raised for a profile, in rule order.
///
/// An empty list means "no flags". Recomputed from scratch on every call.
pub type EmergencyFlagSet = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Specialist,
    Service,
    Test,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SuggestionKind::Specialist => "specialist",
            SuggestionKind::Service => "service",
            SuggestionKind::Test => "test",
        };
        f.write_str(s)
    }
}

/// A recommended specialist, service or test.
///
/// `id` is a stable key: the same rule always produces the same id, which is
/// what de-duplication keys on. It is not unique across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "titleText")]
    pub title: String,
    pub kind: SuggestionKind,
    /// 0..=100, higher is more relevant.
    pub score: u8,
    pub reasons: Vec<String>,
    pub urgent: bool,
}

/// Everything the profile screen shows next to the form: flags for the
/// banner and suggestions for the supporters panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReview {
    pub flags: EmergencyFlagSet,
    pub suggestions: Vec<Suggestion>,
}
