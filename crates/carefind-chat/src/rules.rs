//! Keyword rules deciding when to suggest hospitals and which ones.
//!
//! Everything here is plain case-insensitive substring matching on the
//! lower-cased utterance. No word boundaries: "heartburn" triggers the
//! cardiology rule and "helpful" triggers suggestions.

use carefind_core::types::HospitalRecord;

/// Any of these in the utterance means the reply carries suggestions.
pub static SUGGESTION_KEYWORDS: &[&str] = &[
    "pain",
    "hurt",
    "sick",
    "fever",
    "headache",
    "chest",
    "heart",
    "emergency",
    "doctor",
    "hospital",
    "help",
    "treatment",
];

/// Number of listings returned when no specialty rule applies.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Maps utterance triggers to the specialties worth surfacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialtyRule {
    pub name: &'static str,
    /// Lower-case substrings looked for in the utterance.
    pub triggers: &'static [&'static str],
    /// Substrings looked for in `HospitalRecord::specialty` (case-sensitive).
    pub specialties: &'static [&'static str],
}

/// Evaluated in order; the first rule with a matching trigger wins.
pub static SPECIALTY_RULES: &[SpecialtyRule] = &[
    SpecialtyRule {
        name: "cardiac",
        triggers: &["heart", "chest"],
        specialties: &["Cardiology", "Emergency"],
    },
    SpecialtyRule {
        name: "pediatric",
        triggers: &["child", "kid"],
        specialties: &["Pediatrics", "Emergency"],
    },
    SpecialtyRule {
        name: "diagnostic",
        triggers: &["test", "scan"],
        specialties: &["Diagnostics", "Emergency"],
    },
];

impl SpecialtyRule {
    pub fn triggered_by(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// True if `lowered` contains any suggestion keyword.
pub fn mentions_symptom(lowered: &str) -> bool {
    SUGGESTION_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// First specialty rule triggered by `lowered`, if any.
pub fn matching_rule(lowered: &str) -> Option<&'static SpecialtyRule> {
    SPECIALTY_RULES.iter().find(|r| r.triggered_by(lowered))
}

/// Filter `records` for `lowered`, keeping their original order.
pub fn select<'a>(records: &'a [HospitalRecord], lowered: &str) -> Vec<&'a HospitalRecord> {
    match matching_rule(lowered) {
        Some(rule) => records
            .iter()
            .filter(|h| h.specialty_matches(rule.specialties))
            .collect(),
        None => records.iter().take(DEFAULT_SUGGESTION_COUNT).collect(),
    }
}
