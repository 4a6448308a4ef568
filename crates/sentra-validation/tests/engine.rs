use async_trait::async_trait;
use sentra_core::models::{
    IssueKind, IssueSeverity, Medication, Patient, PlanInteraction, Recommendation,
    TreatmentOption, TreatmentPlan,
};
use sentra_knowledge::entries::{
    ContraindicationRule, CrossReactivityGroup, DosageGuideline, DrugInteraction,
    ExtendedInteraction,
};
use sentra_knowledge::{FactStore, FactStoreError, ReferenceFactStore};
use sentra_validation::cross_validate;
use uuid::Uuid;

fn option(drug: &str, dosage: &str) -> TreatmentOption {
    TreatmentOption {
        drug: drug.to_string(),
        generic_name: None,
        dosage: Some(dosage.to_string()),
        instructions: None,
    }
}

fn plan(primary: TreatmentOption) -> TreatmentPlan {
    TreatmentPlan {
        id: Uuid::new_v4(),
        primary,
        alternatives: Vec::new(),
        drug_interactions: Vec::new(),
        contraindications: Vec::new(),
        risk_factors: Vec::new(),
        flagged_issues: Vec::new(),
        monitoring: None,
        created_at: jiff::Timestamp::now(),
    }
}

fn patient_on(medications: &[&str]) -> Patient {
    Patient {
        age: 58,
        medications: medications
            .iter()
            .map(|name| Medication {
                name: (*name).to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn nitrate_patient_with_pde5_plan_requires_review() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Sildenafil", "50 mg as needed"));
    let patient = patient_on(&["Nitroglycerin"]);

    let report = cross_validate(&plan, &patient, &store).await;

    assert!(!report.is_valid);
    assert_eq!(report.recommendation, Recommendation::ReviewRequired);
    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::MissedInteraction)
        .expect("nitrate + PDE5 interaction must surface");
    assert_eq!(issue.severity, IssueSeverity::Critical);
    assert!(issue.fact_entry.is_some());
}

#[tokio::test]
async fn interaction_already_listed_by_plan_is_not_reflagged() {
    let store = ReferenceFactStore::new();
    let mut plan = plan(option("Sildenafil", "50 mg as needed"));
    plan.drug_interactions.push(PlanInteraction {
        drug_1: "sildenafil".to_string(),
        drug_2: "nitroglycerin".to_string(),
        severity: Some("critical".to_string()),
        note: Some("held nitrates for 48h".to_string()),
    });
    let patient = patient_on(&["Nitroglycerin"]);

    let report = cross_validate(&plan, &patient, &store).await;

    assert!(report.is_valid, "covered interactions are not re-raised");
    assert_eq!(report.recommendation, Recommendation::SafeToProceed);
}

#[tokio::test]
async fn absolute_contraindication_is_critical() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Propranolol", "40 mg twice daily"));
    let mut patient = patient_on(&[]);
    patient.conditions = vec!["asthma".to_string()];

    let report = cross_validate(&plan, &patient, &store).await;

    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.kind, IssueKind::MissedContraindication);
    assert_eq!(issue.severity, IssueSeverity::Critical);
    assert!(!report.is_valid);
}

#[tokio::test]
async fn contraindication_covered_by_plan_passes() {
    let store = ReferenceFactStore::new();
    let mut plan = plan(option("Propranolol", "40 mg twice daily"));
    plan.contraindications
        .push("Avoid non-selective beta blockade in asthma".to_string());
    let mut patient = patient_on(&[]);
    patient.conditions = vec!["asthma".to_string()];

    let report = cross_validate(&plan, &patient, &store).await;
    assert!(report.is_valid);
    assert!(report.issues.is_empty());
}

#[tokio::test]
async fn dose_above_guideline_maximum_is_critical() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Sildenafil", "200 mg daily"));
    let patient = patient_on(&[]);

    let report = cross_validate(&plan, &patient, &store).await;

    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::DosageExceedsMax)
        .expect("200 mg exceeds the 100 mg ceiling");
    assert_eq!(issue.severity, IssueSeverity::Critical);
    assert!(!report.is_valid);
}

#[tokio::test]
async fn non_milligram_doses_are_never_flagged() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Sildenafil", "200 mcg daily"));
    let patient = patient_on(&[]);

    let report = cross_validate(&plan, &patient, &store).await;
    assert!(
        !report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::DosageExceedsMax)
    );
}

#[tokio::test]
async fn geriatric_adjustment_omission_is_flagged() {
    let store = ReferenceFactStore::new();
    let mut plan = plan(option("Sertraline", "50 mg daily"));
    plan.monitoring = Some("Check sodium in two weeks".to_string());
    let mut patient = patient_on(&[]);
    patient.age = 72;

    let report = cross_validate(&plan, &patient, &store).await;

    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::GeriatricDosage)
        .expect("geriatric note exists and the plan ignores age");
    assert_eq!(issue.severity, IssueSeverity::Medium);
    assert!(report.is_valid, "medium issues do not block the plan");
}

#[tokio::test]
async fn plan_addressing_age_suppresses_geriatric_issue() {
    let store = ReferenceFactStore::new();
    let mut plan = plan(option("Sertraline", "25 mg daily"));
    plan.monitoring = Some("Reduced starting dose for elderly patient".to_string());
    let mut patient = patient_on(&[]);
    patient.age = 72;

    let report = cross_validate(&plan, &patient, &store).await;
    assert!(
        !report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::GeriatricDosage)
    );
}

#[tokio::test]
async fn direct_allergy_conflict_is_critical() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Amoxicillin", "500 mg three times daily"));
    let mut patient = patient_on(&[]);
    patient.allergies = vec!["amoxicillin".to_string()];

    let report = cross_validate(&plan, &patient, &store).await;

    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::AllergyConflict)
        .expect("primary matches a documented allergen");
    assert_eq!(issue.severity, IssueSeverity::Critical);
    assert_eq!(report.recommendation, Recommendation::ReviewRequired);
}

#[tokio::test]
async fn cross_reactive_drug_in_union_is_high() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Cephalexin", "500 mg twice daily"));
    let mut patient = patient_on(&[]);
    patient.allergies = vec!["penicillin".to_string()];

    let report = cross_validate(&plan, &patient, &store).await;

    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::CrossReactivity)
        .expect("cephalexin sits in the penicillin cross-reactivity group");
    assert_eq!(issue.severity, IssueSeverity::High);
    assert!(issue.description.contains("~2%"));
    assert!(report.is_valid, "high severity alone does not invalidate");
}

#[tokio::test]
async fn cross_reactivity_already_flagged_by_plan_is_skipped() {
    let store = ReferenceFactStore::new();
    let mut plan = plan(option("Cephalexin", "500 mg twice daily"));
    plan.flagged_issues
        .push("Penicillin allergy discussed; cephalexin risk accepted".to_string());
    let mut patient = patient_on(&[]);
    patient.allergies = vec!["penicillin".to_string()];

    let report = cross_validate(&plan, &patient, &store).await;
    assert!(
        !report
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::CrossReactivity)
    );
}

#[tokio::test]
async fn extended_sweep_catches_pairs_outside_curated_set() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Atorvastatin", "20 mg daily"));
    let patient = patient_on(&["Warfarin", "Amiodarone"]);

    let report = cross_validate(&plan, &patient, &store).await;

    let issue = report
        .issues
        .iter()
        .find(|i| i.description.contains("amiodarone"))
        .expect("extended KB pair must surface");
    assert_eq!(issue.kind, IssueKind::MissedInteraction);
    assert_eq!(issue.severity, IssueSeverity::High);
}

#[tokio::test]
async fn clean_plan_for_clean_patient_is_valid() {
    let store = ReferenceFactStore::new();
    let plan = plan(option("Atorvastatin", "20 mg daily"));
    let patient = patient_on(&[]);

    let report = cross_validate(&plan, &patient, &store).await;
    assert!(report.is_valid);
    assert!(report.issues.is_empty());
    assert_eq!(report.recommendation, Recommendation::SafeToProceed);
}

/// Fact store whose every lookup fails.
struct DownStore;

#[async_trait]
impl FactStore for DownStore {
    async fn find_interactions(
        &self,
        _name: &str,
    ) -> Result<Vec<DrugInteraction>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }

    async fn check_drug_pair(
        &self,
        _a: &str,
        _b: &str,
    ) -> Result<Option<DrugInteraction>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }

    async fn find_contraindications(
        &self,
        _query: &str,
    ) -> Result<Vec<ContraindicationRule>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }

    async fn dosage_guideline(
        &self,
        _drug: &str,
    ) -> Result<Option<DosageGuideline>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }

    async fn check_cross_reactivity(
        &self,
        _allergen: &str,
    ) -> Result<Option<CrossReactivityGroup>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }

    async fn check_pair_extended(
        &self,
        _a: &str,
        _b: &str,
    ) -> Result<Option<ExtendedInteraction>, FactStoreError> {
        Err(FactStoreError::Unavailable("down".to_string()))
    }
}

#[tokio::test]
async fn unavailable_fact_store_degrades_to_no_findings() {
    let plan = plan(option("Sildenafil", "200 mg daily"));
    let patient = patient_on(&["Nitroglycerin"]);

    let report = cross_validate(&plan, &patient, &DownStore).await;

    assert!(report.is_valid, "lookup failures degrade to no-match");
    assert!(report.issues.is_empty());
}
