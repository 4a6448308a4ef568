use async_trait::async_trait;
use sentra_core::models::{
    FlagSeverity, LabPanel, Medication, Patient, PredictedInteraction, PredictedSeverity,
    RiskLevel,
};
use sentra_ensemble::{
    InteractionModel, ModelError, PatientFeatures, RiskEnsemble, RiskModel, RiskPrediction,
};

struct StubRisk {
    trained: bool,
    score: f64,
    confidence: f64,
}

#[async_trait]
impl RiskModel for StubRisk {
    fn is_trained(&self) -> bool {
        self.trained
    }

    async fn predict(&self, _features: &PatientFeatures) -> Result<RiskPrediction, ModelError> {
        Ok(RiskPrediction {
            risk_score: self.score,
            confidence: self.confidence,
        })
    }
}

struct FailingRisk;

#[async_trait]
impl RiskModel for FailingRisk {
    fn is_trained(&self) -> bool {
        true
    }

    async fn predict(&self, _features: &PatientFeatures) -> Result<RiskPrediction, ModelError> {
        Err(ModelError::Prediction("connection refused".to_string()))
    }
}

struct StubInteractions {
    trained: bool,
    predictions: Vec<PredictedInteraction>,
}

#[async_trait]
impl InteractionModel for StubInteractions {
    fn is_trained(&self) -> bool {
        self.trained
    }

    async fn predict_multiple(
        &self,
        _drugs: &[String],
    ) -> Result<Vec<PredictedInteraction>, ModelError> {
        Ok(self.predictions.clone())
    }
}

fn med(name: &str) -> Medication {
    Medication {
        name: name.to_string(),
        ..Default::default()
    }
}

fn two_med_patient() -> Patient {
    Patient {
        age: 30,
        medications: vec![med("lisinopril"), med("metformin")],
        ..Default::default()
    }
}

#[tokio::test]
async fn weighted_average_matches_hand_computation() {
    let mut patient = two_med_patient();
    patient.chief_complaint = Some("mild headache".to_string());

    let ensemble = RiskEnsemble::new(
        StubRisk {
            trained: true,
            score: 80.0,
            confidence: 90.0,
        },
        StubInteractions {
            trained: true,
            predictions: Vec::new(),
        },
    );
    let result = ensemble.compute(&patient).await;

    // neural 80 @ 0.30, interactions 0 @ 0.25, nlp 15 @ 0.20, rules 0 @ 0.25
    assert_eq!(result.overall_score, 27);
    assert_eq!(result.ensemble_confidence, 78);
    assert_eq!(result.confidence_interval.low, 18);
    assert_eq!(result.confidence_interval.high, 36);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.flags.is_empty());
    assert_eq!(result.sub_models.len(), 4);
}

#[tokio::test]
async fn normalization_reproduces_overall_score() {
    let combos: Vec<Patient> = vec![
        Patient {
            age: 85,
            ..Default::default()
        },
        two_med_patient(),
        Patient {
            age: 40,
            chief_complaint: Some("crushing chest pain".to_string()),
            ..Default::default()
        },
    ];

    for (i, patient) in combos.iter().enumerate() {
        let ensemble = RiskEnsemble::new(
            StubRisk {
                trained: i % 2 == 0,
                score: 55.0,
                confidence: 75.0,
            },
            StubInteractions {
                trained: true,
                predictions: Vec::new(),
            },
        );
        let result = ensemble.compute(patient).await;

        let total: f64 = result.sub_models.iter().map(|m| m.weight).sum();
        let expected: f64 = result
            .sub_models
            .iter()
            .map(|m| m.score * m.weight / total)
            .sum();
        assert!(
            (expected.round() - result.overall_score as f64).abs() < f64::EPSILON,
            "stored weights must renormalize to the reported score"
        );
    }
}

#[tokio::test]
async fn critical_flag_overrides_low_weighted_average() {
    let patient = Patient {
        age: 30,
        labs: Some(LabPanel {
            inr: Some(4.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let ensemble = RiskEnsemble::new(
        StubRisk {
            trained: true,
            score: 5.0,
            confidence: 90.0,
        },
        StubInteractions {
            trained: true,
            predictions: Vec::new(),
        },
    );
    let result = ensemble.compute(&patient).await;

    assert!(result.overall_score < 30, "weighted average itself is low");
    assert!(
        result
            .flags
            .iter()
            .any(|f| f.severity == FlagSeverity::Critical)
    );
    assert!(result.risk_level >= RiskLevel::High);
}

#[tokio::test]
async fn missing_complaint_and_medications_still_scores() {
    let patient = Patient {
        age: 70,
        ..Default::default()
    };
    let ensemble = RiskEnsemble::new(
        StubRisk {
            trained: true,
            score: 40.0,
            confidence: 80.0,
        },
        StubInteractions {
            trained: true,
            predictions: Vec::new(),
        },
    );
    let result = ensemble.compute(&patient).await;

    let interaction = result
        .sub_models
        .iter()
        .find(|m| m.name == "drug_interaction")
        .unwrap();
    assert!(!interaction.available);
    assert!((interaction.weight - 0.05).abs() < f64::EPSILON);

    let nlp = result
        .sub_models
        .iter()
        .find(|m| m.name == "complaint_nlp")
        .unwrap();
    assert!(!nlp.available);
    assert!((nlp.weight - 0.05).abs() < f64::EPSILON);

    assert!(result.overall_score <= 100);
    assert!(result.complaint_analysis.is_none());
    assert!(result.differentials.is_empty());
    assert!(result.predicted_interactions.is_empty());
}

#[tokio::test]
async fn neural_failure_uses_feature_average_fallback() {
    let patient = two_med_patient();
    let ensemble = RiskEnsemble::new(
        FailingRisk,
        StubInteractions {
            trained: true,
            predictions: Vec::new(),
        },
    );
    let result = ensemble.compute(&patient).await;

    let neural = result
        .sub_models
        .iter()
        .find(|m| m.name == "neural_risk")
        .unwrap();
    assert!(!neural.available);
    assert!((neural.confidence - 50.0).abs() < f64::EPSILON);
    assert!((neural.weight - 0.15).abs() < f64::EPSILON);
    // age 30/100 + 2 meds/10 + default systolic 120/200, averaged over 5
    assert!((neural.score - 22.0).abs() < 1e-9);
}

#[tokio::test]
async fn interaction_predictions_score_and_flag() {
    let predictions = vec![
        PredictedInteraction {
            drug_1: "warfarin".to_string(),
            drug_2: "aspirin".to_string(),
            predicted_severity: PredictedSeverity::Major,
            confidence: 80.0,
        },
        PredictedInteraction {
            drug_1: "lisinopril".to_string(),
            drug_2: "spironolactone".to_string(),
            predicted_severity: PredictedSeverity::Moderate,
            confidence: 60.0,
        },
        PredictedInteraction {
            drug_1: "omeprazole".to_string(),
            drug_2: "clopidogrel".to_string(),
            predicted_severity: PredictedSeverity::Minor,
            confidence: 40.0,
        },
    ];
    let ensemble = RiskEnsemble::new(
        StubRisk {
            trained: true,
            score: 20.0,
            confidence: 70.0,
        },
        StubInteractions {
            trained: true,
            predictions,
        },
    );
    let result = ensemble.compute(&two_med_patient()).await;

    let interaction = result
        .sub_models
        .iter()
        .find(|m| m.name == "drug_interaction")
        .unwrap();
    assert!((interaction.score - 41.0).abs() < f64::EPSILON, "25 + 12 + 4");
    assert!((interaction.confidence - 60.0).abs() < f64::EPSILON);
    assert!((interaction.weight - 0.25).abs() < f64::EPSILON);

    let critical = result
        .flags
        .iter()
        .filter(|f| f.severity == FlagSeverity::Critical)
        .count();
    let warnings = result
        .flags
        .iter()
        .filter(|f| f.severity == FlagSeverity::Warning)
        .count();
    assert_eq!(critical, 1, "one major prediction, minor emits nothing");
    assert_eq!(warnings, 1);

    assert_eq!(result.predicted_interactions.len(), 3);
    assert!(result.risk_level >= RiskLevel::High, "critical flag override");
}

#[tokio::test]
async fn untrained_models_carry_reduced_weight() {
    let patient = two_med_patient();
    let ensemble = RiskEnsemble::new(
        StubRisk {
            trained: false,
            score: 50.0,
            confidence: 60.0,
        },
        StubInteractions {
            trained: false,
            predictions: Vec::new(),
        },
    );
    let result = ensemble.compute(&patient).await;

    let neural = result
        .sub_models
        .iter()
        .find(|m| m.name == "neural_risk")
        .unwrap();
    assert!((neural.weight - 0.15).abs() < f64::EPSILON);
    assert!(neural.available, "untrained is still available");

    let interaction = result
        .sub_models
        .iter()
        .find(|m| m.name == "drug_interaction")
        .unwrap();
    assert!((interaction.weight - 0.15).abs() < f64::EPSILON);
}
