pub mod complaint;
pub mod flags;
pub mod patient;
pub mod plan;
pub mod risk;
pub mod validation;

pub use complaint::{
    Acuity, BodySystem, ChiefComplaintAnalysis, DifferentialEntry, DurationClass, DurationInfo,
    SymptomEntity,
};
pub use flags::{ClinicalFlag, FlagCategory, FlagSeverity};
pub use patient::{
    ActivityLevel, AlcoholUse, LabPanel, Lifestyle, Medication, Patient, Sex, SmokingStatus,
    VitalSigns,
};
pub use plan::{PlanInteraction, TreatmentOption, TreatmentPlan};
pub use risk::{
    ConfidenceInterval, EnsembleRiskResult, PredictedInteraction, PredictedSeverity, RiskLevel,
    SubModelScore,
};
pub use validation::{IssueKind, IssueSeverity, Recommendation, ValidationIssue, ValidationReport};
