use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A treatment plan produced by the external generator, as handed to the
/// cross-validation engine. Sentra audits this structure; it never builds
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub id: Uuid,
    pub primary: TreatmentOption,
    #[serde(default)]
    pub alternatives: Vec<TreatmentOption>,
    /// Interactions the generator itself already identified.
    #[serde(default)]
    pub drug_interactions: Vec<PlanInteraction>,
    /// Contraindications the generator itself already identified.
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Free-form safety concerns the generator attached to the plan.
    #[serde(default)]
    pub flagged_issues: Vec<String>,
    #[serde(default)]
    pub monitoring: Option<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreatmentOption {
    pub drug: String,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl TreatmentOption {
    /// Lowercased drug plus generic name, when present.
    pub fn names(&self) -> Vec<String> {
        let mut names = vec![self.drug.to_lowercase()];
        if let Some(generic) = &self.generic_name {
            names.push(generic.to_lowercase());
        }
        names
    }
}

/// An interaction entry as recorded by the plan generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInteraction {
    pub drug_1: String,
    pub drug_2: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl PlanInteraction {
    /// Whether this entry covers the given unordered pair.
    pub fn covers(&self, a: &str, b: &str) -> bool {
        let d1 = self.drug_1.to_lowercase();
        let d2 = self.drug_2.to_lowercase();
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        (d1 == a && d2 == b) || (d1 == b && d2 == a)
    }
}
