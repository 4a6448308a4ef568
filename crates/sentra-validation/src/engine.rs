//! The plan audit. Each check is an independent pass over the fact store;
//! a failed lookup counts as "no match" for that rule and never aborts the
//! validation.

use std::sync::LazyLock;

use regex::Regex;
use sentra_core::models::{
    IssueKind, IssueSeverity, Patient, TreatmentPlan, ValidationIssue, ValidationReport,
};
use sentra_knowledge::entries::names_match;
use sentra_knowledge::{FactStore, RuleType};
use tracing::{debug, info};

static FIRST_MG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*mg").expect("mg pattern is valid")
});

/// Extended-KB interactions below this significance are not worth flagging.
const SWEEP_SIGNIFICANCE_FLOOR: u8 = 4;

/// Audit a generated plan against the fact store and the patient record.
pub async fn cross_validate(
    plan: &TreatmentPlan,
    patient: &Patient,
    facts: &dyn FactStore,
) -> ValidationReport {
    let union = drug_union(plan, patient);
    debug!(drugs = union.len(), "validating plan drug union");

    let mut issues = Vec::new();
    issues.extend(missed_interactions(plan, &union, facts).await);
    issues.extend(missed_contraindications(plan, patient, facts).await);
    issues.extend(dosage_issues(plan, patient, facts).await);
    issues.extend(allergy_conflicts(plan, patient, &union, facts).await);
    sweep_extended(&mut issues, plan, patient, &union, facts).await;

    let report = ValidationReport::from_issues(issues);
    info!(
        issues = report.issues.len(),
        is_valid = report.is_valid,
        "plan cross-validation complete"
    );
    report
}

/// Unique lowercased union of primary, alternative, and current-medication
/// drug and generic names, in first-seen order.
fn drug_union(plan: &TreatmentPlan, patient: &Patient) -> Vec<String> {
    let mut union: Vec<String> = Vec::new();
    let mut push = |name: String| {
        if !name.is_empty() && !union.contains(&name) {
            union.push(name);
        }
    };

    for name in plan.primary.names() {
        push(name);
    }
    for alternative in &plan.alternatives {
        for name in alternative.names() {
            push(name);
        }
    }
    for name in patient.medication_names() {
        push(name);
    }
    union
}

/// Step 2: curated pairs the plan's own interaction list does not cover.
async fn missed_interactions(
    plan: &TreatmentPlan,
    union: &[String],
    facts: &dyn FactStore,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (i, a) in union.iter().enumerate() {
        for b in &union[i + 1..] {
            let hit = facts.check_drug_pair(a, b).await.ok().flatten();
            let Some(entry) = hit else { continue };

            if plan.drug_interactions.iter().any(|pi| pi.covers(a, b)) {
                continue;
            }
            issues.push(ValidationIssue {
                kind: IssueKind::MissedInteraction,
                severity: entry.severity,
                description: format!(
                    "Interaction not addressed by plan: {} + {} — {}",
                    entry.drug_1, entry.drug_2, entry.description
                ),
                fact_entry: serde_json::to_value(&entry).ok(),
            });
        }
    }
    issues
}

/// Step 3: contraindication rules against the primary treatment.
async fn missed_contraindications(
    plan: &TreatmentPlan,
    patient: &Patient,
    facts: &dyn FactStore,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let primary_names = plan.primary.names();

    for condition in &patient.conditions {
        let rules = facts
            .find_contraindications(condition)
            .await
            .unwrap_or_default();
        for rule in rules {
            let drug_hit = primary_names.iter().any(|name| names_match(rule.drug, name));
            if !drug_hit {
                continue;
            }
            if plan_covers_contraindication(plan, rule.drug, rule.condition) {
                continue;
            }
            let severity = match rule.rule_type {
                RuleType::Absolute => IssueSeverity::Critical,
                RuleType::Relative => IssueSeverity::High,
            };
            issues.push(ValidationIssue {
                kind: IssueKind::MissedContraindication,
                severity,
                description: format!(
                    "{} is contraindicated with {}: {}",
                    rule.drug, rule.condition, rule.note
                ),
                fact_entry: serde_json::to_value(&rule).ok(),
            });
        }
    }
    issues
}

fn plan_covers_contraindication(plan: &TreatmentPlan, drug: &str, condition: &str) -> bool {
    plan.contraindications.iter().any(|entry| {
        let entry = entry.to_lowercase();
        entry.contains(&condition.to_lowercase()) || entry.contains(&drug.to_lowercase())
    })
}

/// Step 4: dosage ceiling and geriatric-adjustment checks.
async fn dosage_issues(
    plan: &TreatmentPlan,
    patient: &Patient,
    facts: &dyn FactStore,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut guideline = facts
        .dosage_guideline(&plan.primary.drug)
        .await
        .ok()
        .flatten();
    if guideline.is_none()
        && let Some(generic) = &plan.primary.generic_name
    {
        guideline = facts.dosage_guideline(generic).await.ok().flatten();
    }
    let Some(guideline) = guideline else {
        return issues;
    };

    let proposed = plan
        .primary
        .dosage
        .as_deref()
        .map(first_mg_value)
        .unwrap_or(0.0);
    let max = first_mg_value(guideline.max_daily_dose);
    if max > 0.0 && proposed > max {
        issues.push(ValidationIssue {
            kind: IssueKind::DosageExceedsMax,
            severity: IssueSeverity::Critical,
            description: format!(
                "Proposed dose {proposed:.0} mg exceeds guideline maximum for {}: {}",
                guideline.drug, guideline.max_daily_dose
            ),
            fact_entry: serde_json::to_value(&guideline).ok(),
        });
    }

    if patient.age > 65
        && let Some(adjustment) = guideline.geriatric_adjustment
        && !plan_mentions_age(plan)
    {
        issues.push(ValidationIssue {
            kind: IssueKind::GeriatricDosage,
            severity: IssueSeverity::Medium,
            description: format!(
                "Patient is {} and the plan does not address age-adjusted dosing: {adjustment}",
                patient.age
            ),
            fact_entry: serde_json::to_value(&guideline).ok(),
        });
    }
    issues
}

fn plan_mentions_age(plan: &TreatmentPlan) -> bool {
    let monitoring = plan.monitoring.as_deref().unwrap_or("").to_lowercase();
    let in_monitoring = ["age", "elderly", "geriatric"]
        .iter()
        .any(|needle| monitoring.contains(needle));
    let in_risk_factors = plan.risk_factors.iter().any(|factor| {
        let factor = factor.to_lowercase();
        factor.contains("age") || factor.contains("elderly") || factor.contains("geriatric")
    });
    in_monitoring || in_risk_factors
}

/// Parse the first `NNN mg` value out of a dosage string. Anything without
/// a milligram figure (mcg, mL, unparsable text) yields 0 and is never
/// flagged.
pub fn first_mg_value(text: &str) -> f64 {
    FIRST_MG
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Step 5: direct allergen matches against the primary drug, then
/// cross-reactivity groups against the whole union.
async fn allergy_conflicts(
    plan: &TreatmentPlan,
    patient: &Patient,
    union: &[String],
    facts: &dyn FactStore,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for allergen in &patient.allergies {
        let direct_hit = plan
            .primary
            .names()
            .iter()
            .any(|name| names_match(allergen, name));
        if direct_hit && !plan_flags_mention(plan, allergen) {
            issues.push(ValidationIssue {
                kind: IssueKind::AllergyConflict,
                severity: IssueSeverity::Critical,
                description: format!(
                    "Documented {} allergy conflicts with primary treatment {}",
                    allergen, plan.primary.drug
                ),
                fact_entry: None,
            });
        }

        let group = facts.check_cross_reactivity(allergen).await.ok().flatten();
        let Some(group) = group else { continue };
        for drug in union {
            let cross_hit = group
                .cross_reactive
                .iter()
                .any(|candidate| names_match(candidate, drug));
            if !cross_hit || plan_flags_mention(plan, drug) {
                continue;
            }
            issues.push(ValidationIssue {
                kind: IssueKind::CrossReactivity,
                severity: IssueSeverity::High,
                description: format!(
                    "{} cross-reacts with documented {} allergy ({} rate). {}",
                    drug, group.allergen, group.rate, group.recommendation
                ),
                fact_entry: serde_json::to_value(&group).ok(),
            });
        }
    }
    issues
}

fn plan_flags_mention(plan: &TreatmentPlan, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    plan.flagged_issues
        .iter()
        .any(|entry| entry.to_lowercase().contains(&needle))
}

/// Step 6: the knowledge-base-wide sweep over the extended interaction KB
/// and the contraindication table for every drug in the union, deduplicated
/// against issues already collected.
async fn sweep_extended(
    issues: &mut Vec<ValidationIssue>,
    plan: &TreatmentPlan,
    patient: &Patient,
    union: &[String],
    facts: &dyn FactStore,
) {
    for (i, a) in union.iter().enumerate() {
        for b in &union[i + 1..] {
            let hit = facts.check_pair_extended(a, b).await.ok().flatten();
            let Some(entry) = hit else { continue };
            if entry.clinical_significance < SWEEP_SIGNIFICANCE_FLOOR {
                continue;
            }
            if issues_mention_pair(issues, a, b) {
                continue;
            }
            let severity = if entry.clinical_significance >= 7 {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            };
            issues.push(ValidationIssue {
                kind: IssueKind::MissedInteraction,
                severity,
                description: format!(
                    "Knowledge-base interaction not addressed by plan: {} + {} — {}",
                    entry.drug_1, entry.drug_2, entry.effect
                ),
                fact_entry: serde_json::to_value(&entry).ok(),
            });
        }
    }

    for condition in &patient.conditions {
        let rules = facts
            .find_contraindications(condition)
            .await
            .unwrap_or_default();
        for rule in rules {
            let drug_hit = union.iter().any(|drug| names_match(rule.drug, drug));
            if !drug_hit
                || plan_covers_contraindication(plan, rule.drug, rule.condition)
                || issues_mention(issues, rule.drug)
            {
                continue;
            }
            let severity = match rule.rule_type {
                RuleType::Absolute => IssueSeverity::High,
                RuleType::Relative => IssueSeverity::Medium,
            };
            issues.push(ValidationIssue {
                kind: IssueKind::MissedContraindication,
                severity,
                description: format!(
                    "Current regimen conflicts with {}: {} is contraindicated — {}",
                    rule.condition, rule.drug, rule.note
                ),
                fact_entry: serde_json::to_value(&rule).ok(),
            });
        }
    }
}

fn issues_mention_pair(issues: &[ValidationIssue], a: &str, b: &str) -> bool {
    issues.iter().any(|issue| {
        let description = issue.description.to_lowercase();
        description.contains(&a.to_lowercase()) && description.contains(&b.to_lowercase())
    })
}

fn issues_mention(issues: &[ValidationIssue], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    issues
        .iter()
        .any(|issue| issue.description.to_lowercase().contains(&needle))
}
