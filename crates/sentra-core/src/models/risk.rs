use serde::{Deserialize, Serialize};

use super::complaint::{ChiefComplaintAnalysis, DifferentialEntry};
use super::flags::ClinicalFlag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Threshold the overall 0–100 score into a tier.
    pub fn from_score(score: u8) -> RiskLevel {
        match score {
            80.. => RiskLevel::Critical,
            60..=79 => RiskLevel::High,
            30..=59 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// One contributing model's output within an ensemble run.
///
/// `weight` is the pre-normalization weight; the combiner divides by the
/// sum over all sub-models so effective weights always total 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubModelScore {
    pub name: String,
    /// 0–100.
    pub score: f64,
    pub weight: f64,
    /// 0–100.
    pub confidence: f64,
    pub available: bool,
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: u8,
    pub high: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictedSeverity {
    Minor,
    Moderate,
    Major,
}

/// A pairwise interaction predicted by the trained interaction model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictedInteraction {
    pub drug_1: String,
    pub drug_2: String,
    pub predicted_severity: PredictedSeverity,
    /// 0–100.
    pub confidence: f64,
}

/// Calibrated output of one ensemble run. Built fresh per request and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleRiskResult {
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub confidence_interval: ConfidenceInterval,
    pub ensemble_confidence: u8,
    pub sub_models: Vec<SubModelScore>,
    pub flags: Vec<ClinicalFlag>,
    pub complaint_analysis: Option<ChiefComplaintAnalysis>,
    pub predicted_interactions: Vec<PredictedInteraction>,
    pub differentials: Vec<DifferentialEntry>,
    pub timestamp: jiff::Timestamp,
}
