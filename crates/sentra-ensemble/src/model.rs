//! Contracts for the two injected predictive models.

use async_trait::async_trait;
use sentra_core::models::{Patient, PredictedInteraction};
use serde::Serialize;

use crate::error::ModelError;

/// Numeric feature vector handed to the neural risk model, also used to
/// derive the deterministic fallback score when the model fails.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatientFeatures {
    pub age: f64,
    pub medication_count: f64,
    pub condition_count: f64,
    pub allergy_count: f64,
    pub systolic_bp: f64,
}

impl PatientFeatures {
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            age: patient.age as f64,
            medication_count: patient.medications.len() as f64,
            condition_count: patient.conditions.len() as f64,
            allergy_count: patient.allergies.len() as f64,
            systolic_bp: patient
                .vitals
                .and_then(|v| v.systolic_bp)
                .unwrap_or(120.0),
        }
    }

    /// Each feature scaled to [0, 1].
    pub fn normalized(&self) -> [f64; 5] {
        [
            (self.age / 100.0).clamp(0.0, 1.0),
            (self.medication_count / 10.0).clamp(0.0, 1.0),
            (self.condition_count / 8.0).clamp(0.0, 1.0),
            (self.allergy_count / 6.0).clamp(0.0, 1.0),
            (self.systolic_bp / 200.0).clamp(0.0, 1.0),
        ]
    }

    /// Mean of the normalized features scaled to 0–100; the fallback score
    /// when the neural model is unreachable.
    pub fn fallback_score(&self) -> f64 {
        let normalized = self.normalized();
        normalized.iter().sum::<f64>() / normalized.len() as f64 * 100.0
    }
}

/// Prediction returned by the trained numeric risk model.
#[derive(Debug, Clone, Copy)]
pub struct RiskPrediction {
    /// 0–100.
    pub risk_score: f64,
    /// 0–100.
    pub confidence: f64,
}

/// Trained numeric risk model, typically served out of process.
#[async_trait]
pub trait RiskModel: Send + Sync {
    fn is_trained(&self) -> bool;

    async fn predict(&self, features: &PatientFeatures) -> Result<RiskPrediction, ModelError>;
}

/// Trained pairwise drug-interaction model.
#[async_trait]
pub trait InteractionModel: Send + Sync {
    fn is_trained(&self) -> bool;

    /// Predict interactions across every pair drawn from `drugs`.
    async fn predict_multiple(
        &self,
        drugs: &[String],
    ) -> Result<Vec<PredictedInteraction>, ModelError>;
}
