use sentra_core::models::{
    Acuity, BodySystem, DurationClass, DurationInfo, IssueKind, IssueSeverity, Recommendation,
    RiskLevel, ValidationIssue, ValidationReport,
};

#[test]
fn risk_level_thresholds() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(59), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(60), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(79), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(80), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
}

#[test]
fn risk_levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::Critical);
}

#[test]
fn acuity_escalation_saturates() {
    assert_eq!(Acuity::Routine.escalate(), Acuity::SemiUrgent);
    assert_eq!(Acuity::SemiUrgent.escalate(), Acuity::Urgent);
    assert_eq!(Acuity::Urgent.escalate(), Acuity::Emergent);
    assert_eq!(Acuity::Emergent.escalate(), Acuity::Emergent);
}

#[test]
fn duration_classification_boundaries() {
    assert_eq!(DurationInfo::classify(0.02), DurationClass::Acute);
    assert_eq!(DurationInfo::classify(13.9), DurationClass::Acute);
    assert_eq!(DurationInfo::classify(14.0), DurationClass::Subacute);
    assert_eq!(DurationInfo::classify(89.9), DurationClass::Subacute);
    assert_eq!(DurationInfo::classify(90.0), DurationClass::Chronic);
}

fn issue(severity: IssueSeverity) -> ValidationIssue {
    ValidationIssue {
        kind: IssueKind::MissedInteraction,
        severity,
        description: "test issue".to_string(),
        fact_entry: None,
    }
}

#[test]
fn report_without_critical_issues_is_valid() {
    let report = ValidationReport::from_issues(vec![
        issue(IssueSeverity::Low),
        issue(IssueSeverity::Medium),
        issue(IssueSeverity::High),
    ]);
    assert!(report.is_valid);
    assert_eq!(report.recommendation, Recommendation::SafeToProceed);
}

#[test]
fn report_with_critical_issue_requires_review() {
    let report = ValidationReport::from_issues(vec![
        issue(IssueSeverity::Low),
        issue(IssueSeverity::Critical),
    ]);
    assert!(!report.is_valid);
    assert_eq!(report.recommendation, Recommendation::ReviewRequired);
}

#[test]
fn empty_report_is_valid() {
    let report = ValidationReport::from_issues(Vec::new());
    assert!(report.is_valid);
    assert_eq!(report.recommendation, Recommendation::SafeToProceed);
}

#[test]
fn body_system_labels() {
    assert_eq!(BodySystem::EarNoseThroat.as_str(), "ear/nose/throat");
    assert_eq!(BodySystem::Cardiovascular.as_str(), "cardiovascular");
    assert_eq!(Acuity::SemiUrgent.as_str(), "semi-urgent");
}

#[test]
fn risk_level_serializes_uppercase() {
    assert_eq!(
        serde_json::to_string(&RiskLevel::Critical).unwrap(),
        "\"CRITICAL\""
    );
    assert_eq!(
        serde_json::to_string(&Recommendation::ReviewRequired).unwrap(),
        "\"REVIEW_REQUIRED\""
    );
}
