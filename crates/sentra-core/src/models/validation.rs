use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissedInteraction,
    MissedContraindication,
    DosageExceedsMax,
    GeriatricDosage,
    AllergyConflict,
    CrossReactivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// An omission or conflict found while auditing a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub description: String,
    /// The fact-store entry that triggered the issue, serialized as-is.
    #[serde(default)]
    pub fact_entry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SafeToProceed,
    ReviewRequired,
}

/// Outcome of cross-validating one plan. `is_valid` holds exactly when no
/// issue is critical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub recommendation: Recommendation,
    pub checked_at: jiff::Timestamp,
}

impl ValidationReport {
    /// Aggregate issues into a report; validity and recommendation are
    /// derived, never set independently.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let is_valid = !issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Critical);
        let recommendation = if is_valid {
            Recommendation::SafeToProceed
        } else {
            Recommendation::ReviewRequired
        };
        Self {
            is_valid,
            issues,
            recommendation,
            checked_at: jiff::Timestamp::now(),
        }
    }
}
