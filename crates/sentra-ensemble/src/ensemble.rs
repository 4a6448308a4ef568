//! The ensemble combiner: runs all four sub-models fail-soft, renormalizes
//! their weights, and assembles the calibrated result.

use sentra_core::models::{
    Acuity, ChiefComplaintAnalysis, ClinicalFlag, ConfidenceInterval, EnsembleRiskResult,
    FlagCategory, FlagSeverity, Patient, PredictedInteraction, PredictedSeverity, RiskLevel,
    SubModelScore,
};
use serde_json::json;
use tracing::{info, warn};

use crate::heuristic::{self, HEURISTIC_CONFIDENCE};
use crate::model::{InteractionModel, PatientFeatures, RiskModel};

// Pre-normalization sub-model weights. The combiner divides by their sum,
// so only the ratios matter.
pub const NEURAL_WEIGHT_TRAINED: f64 = 0.30;
pub const NEURAL_WEIGHT_UNTRAINED: f64 = 0.15;
pub const INTERACTION_WEIGHT_TRAINED: f64 = 0.25;
pub const INTERACTION_WEIGHT_UNTRAINED: f64 = 0.15;
pub const INTERACTION_WEIGHT_SKIPPED: f64 = 0.05;
pub const NLP_WEIGHT: f64 = 0.20;
pub const NLP_WEIGHT_ABSENT: f64 = 0.05;
pub const HEURISTIC_WEIGHT: f64 = 0.25;

const INTERVAL_MARGIN_FACTOR: f64 = 0.4;

/// The multi-model risk combiner. The two predictive models are injected;
/// the complaint analyzer and heuristic scorer run inline.
pub struct RiskEnsemble<R, I> {
    neural: R,
    interactions: I,
}

impl<R: RiskModel, I: InteractionModel> RiskEnsemble<R, I> {
    pub fn new(neural: R, interactions: I) -> Self {
        Self {
            neural,
            interactions,
        }
    }

    /// Compute one calibrated risk assessment. Never fails: every
    /// collaborator error is downgraded to a fallback sub-model score.
    pub async fn compute(&self, patient: &Patient) -> EnsembleRiskResult {
        let analysis = patient
            .chief_complaint
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(sentra_complaint::analyze);

        let features = PatientFeatures::from_patient(patient);
        let (neural, (interaction, interaction_flags, predicted)) = tokio::join!(
            self.neural_submodel(&features),
            self.interaction_submodel(patient),
        );

        let (nlp, nlp_flags) = nlp_submodel(analysis.as_ref());
        let heuristic_score = heuristic::score(patient);
        let heuristic = SubModelScore {
            name: "heuristic_rules".to_string(),
            score: heuristic_score.score,
            weight: HEURISTIC_WEIGHT,
            confidence: HEURISTIC_CONFIDENCE,
            available: true,
            details: json!({ "flags": heuristic_score.flags.len() }),
        };

        let sub_models = vec![neural, interaction, nlp, heuristic];

        let total_weight: f64 = sub_models.iter().map(|m| m.weight).sum();
        let overall: f64 = sub_models
            .iter()
            .map(|m| m.score * m.weight / total_weight)
            .sum();
        let confidence: f64 = sub_models
            .iter()
            .map(|m| m.confidence * m.weight / total_weight)
            .sum();

        let overall_score = overall.round().clamp(0.0, 100.0) as u8;
        let ensemble_confidence = confidence.round().clamp(0.0, 100.0) as u8;

        let margin = ((100.0 - ensemble_confidence as f64) * INTERVAL_MARGIN_FACTOR).round() as i32;
        let confidence_interval = ConfidenceInterval {
            low: (overall_score as i32 - margin).max(0) as u8,
            high: (overall_score as i32 + margin).min(100) as u8,
        };

        // Producer order: interaction model, NLP, heuristic rules. The
        // neural model emits no flags.
        let mut flags = interaction_flags;
        flags.extend(nlp_flags);
        flags.extend(heuristic_score.flags);

        // A critical individual finding must never be diluted by a low
        // weighted average.
        let mut risk_level = RiskLevel::from_score(overall_score);
        let has_critical = flags.iter().any(|f| f.severity == FlagSeverity::Critical);
        if has_critical && risk_level < RiskLevel::High {
            risk_level = RiskLevel::High;
        }

        info!(
            overall_score,
            risk_level = ?risk_level,
            flags = flags.len(),
            "ensemble risk computed"
        );

        let differentials = analysis
            .as_ref()
            .map(|a| a.differentials.clone())
            .unwrap_or_default();

        EnsembleRiskResult {
            overall_score,
            risk_level,
            confidence_interval,
            ensemble_confidence,
            sub_models,
            flags,
            complaint_analysis: analysis,
            predicted_interactions: predicted,
            differentials,
            timestamp: jiff::Timestamp::now(),
        }
    }

    async fn neural_submodel(&self, features: &PatientFeatures) -> SubModelScore {
        let weight = if self.neural.is_trained() {
            NEURAL_WEIGHT_TRAINED
        } else {
            NEURAL_WEIGHT_UNTRAINED
        };

        match self.neural.predict(features).await {
            Ok(prediction) => SubModelScore {
                name: "neural_risk".to_string(),
                score: prediction.risk_score.clamp(0.0, 100.0),
                weight,
                confidence: prediction.confidence.clamp(0.0, 100.0),
                available: true,
                details: json!({ "trained": self.neural.is_trained() }),
            },
            Err(err) => {
                warn!(error = %err, "neural model failed, using feature-average fallback");
                SubModelScore {
                    name: "neural_risk".to_string(),
                    score: features.fallback_score(),
                    weight: NEURAL_WEIGHT_UNTRAINED,
                    confidence: 50.0,
                    available: false,
                    details: json!({ "fallback": "feature_average" }),
                }
            }
        }
    }

    async fn interaction_submodel(
        &self,
        patient: &Patient,
    ) -> (SubModelScore, Vec<ClinicalFlag>, Vec<PredictedInteraction>) {
        if patient.medications.len() < 2 {
            let score = SubModelScore {
                name: "drug_interaction".to_string(),
                score: 0.0,
                weight: INTERACTION_WEIGHT_SKIPPED,
                confidence: 30.0,
                available: false,
                details: json!({ "skipped": "fewer than two medications" }),
            };
            return (score, Vec::new(), Vec::new());
        }

        let names: Vec<String> = patient.medications.iter().map(|m| m.name.clone()).collect();
        match self.interactions.predict_multiple(&names).await {
            Ok(predicted) => {
                let raw: f64 = predicted
                    .iter()
                    .map(|p| match p.predicted_severity {
                        PredictedSeverity::Major => 25.0,
                        PredictedSeverity::Moderate => 12.0,
                        PredictedSeverity::Minor => 4.0,
                    })
                    .sum();
                let confidence = if predicted.is_empty() {
                    70.0
                } else {
                    predicted.iter().map(|p| p.confidence).sum::<f64>() / predicted.len() as f64
                };

                let mut flags = Vec::new();
                for p in &predicted {
                    match p.predicted_severity {
                        PredictedSeverity::Major => flags.push(ClinicalFlag::critical(
                            FlagCategory::Interaction,
                            format!("Predicted major interaction: {} + {}", p.drug_1, p.drug_2),
                        )),
                        PredictedSeverity::Moderate => flags.push(ClinicalFlag::warning(
                            FlagCategory::Interaction,
                            format!("Predicted moderate interaction: {} + {}", p.drug_1, p.drug_2),
                        )),
                        PredictedSeverity::Minor => {}
                    }
                }

                let weight = if self.interactions.is_trained() {
                    INTERACTION_WEIGHT_TRAINED
                } else {
                    INTERACTION_WEIGHT_UNTRAINED
                };
                let score = SubModelScore {
                    name: "drug_interaction".to_string(),
                    score: raw.min(100.0),
                    weight,
                    confidence,
                    available: true,
                    details: json!({ "predicted_pairs": predicted.len() }),
                };
                (score, flags, predicted)
            }
            Err(err) => {
                warn!(error = %err, "interaction model failed, scoring zero");
                let score = SubModelScore {
                    name: "drug_interaction".to_string(),
                    score: 0.0,
                    weight: INTERACTION_WEIGHT_SKIPPED,
                    confidence: 30.0,
                    available: false,
                    details: json!({ "error": err.to_string() }),
                };
                (score, Vec::new(), Vec::new())
            }
        }
    }
}

fn acuity_score(acuity: Acuity) -> f64 {
    match acuity {
        Acuity::Emergent => 90.0,
        Acuity::Urgent => 65.0,
        Acuity::SemiUrgent => 40.0,
        Acuity::Routine => 15.0,
    }
}

fn nlp_submodel(
    analysis: Option<&ChiefComplaintAnalysis>,
) -> (SubModelScore, Vec<ClinicalFlag>) {
    let Some(analysis) = analysis else {
        let score = SubModelScore {
            name: "complaint_nlp".to_string(),
            score: 0.0,
            weight: NLP_WEIGHT_ABSENT,
            confidence: 20.0,
            available: false,
            details: json!({ "skipped": "no chief complaint" }),
        };
        return (score, Vec::new());
    };

    let red_flag_count = analysis.red_flags.len();
    let raw = acuity_score(analysis.acuity) + (red_flag_count as f64 * 10.0).min(20.0);

    let mut flags = Vec::new();
    for red_flag in &analysis.red_flags {
        flags.push(ClinicalFlag::critical(
            FlagCategory::RedFlag,
            format!("Red-flag symptom: {red_flag}"),
        ));
    }
    match analysis.acuity {
        Acuity::Emergent => flags.push(ClinicalFlag::critical(
            FlagCategory::Acuity,
            "Emergent presentation by complaint analysis",
        )),
        Acuity::Urgent => flags.push(ClinicalFlag::warning(
            FlagCategory::Acuity,
            "Urgent presentation by complaint analysis",
        )),
        _ => {}
    }

    let score = SubModelScore {
        name: "complaint_nlp".to_string(),
        score: raw.min(100.0),
        weight: NLP_WEIGHT,
        confidence: analysis.confidence as f64,
        available: true,
        details: json!({
            "acuity": analysis.acuity.as_str(),
            "red_flags": red_flag_count,
        }),
    };
    (score, flags)
}
