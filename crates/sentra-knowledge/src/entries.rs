//! Fact-store entry types. All entries point into static seed tables, so
//! string fields are `&'static str`; they serialize for embedding into
//! validation issues.

use sentra_core::models::IssueSeverity;
use serde::Serialize;

/// A curated drug-pair interaction. Pairs are unordered; lookups match
/// either orientation.
#[derive(Debug, Clone, Serialize)]
pub struct DrugInteraction {
    pub drug_1: &'static str,
    pub drug_2: &'static str,
    pub severity: IssueSeverity,
    pub description: &'static str,
}

impl DrugInteraction {
    pub fn involves(&self, name: &str) -> bool {
        names_match(self.drug_1, name) || names_match(self.drug_2, name)
    }

    pub fn matches_pair(&self, a: &str, b: &str) -> bool {
        (names_match(self.drug_1, a) && names_match(self.drug_2, b))
            || (names_match(self.drug_1, b) && names_match(self.drug_2, a))
    }
}

/// An extended-knowledge-base interaction, scored 1–10 by clinical
/// significance rather than bucketed by severity.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedInteraction {
    pub drug_1: &'static str,
    pub drug_2: &'static str,
    pub clinical_significance: u8,
    pub effect: &'static str,
}

impl ExtendedInteraction {
    pub fn matches_pair(&self, a: &str, b: &str) -> bool {
        (names_match(self.drug_1, a) && names_match(self.drug_2, b))
            || (names_match(self.drug_1, b) && names_match(self.drug_2, a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContraindicationRule {
    pub drug: &'static str,
    pub condition: &'static str,
    pub rule_type: RuleType,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DosageGuideline {
    pub drug: &'static str,
    /// Human-readable guideline; the first `NNN mg` value is the ceiling.
    pub max_daily_dose: &'static str,
    pub geriatric_adjustment: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrossReactivityGroup {
    pub allergen: &'static str,
    pub cross_reactive: &'static [&'static str],
    /// Reported cross-reactivity rate, e.g. `"~2%"`.
    pub rate: &'static str,
    pub recommendation: &'static str,
}

/// Case-insensitive bidirectional substring match used by every lookup.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}
