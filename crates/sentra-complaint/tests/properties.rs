//! Property tests: the analyzer is total and its invariants hold for
//! arbitrary input.

use proptest::prelude::*;
use sentra_complaint::analyze;
use sentra_core::models::Acuity;

proptest! {
    /// Never panics and always respects output ranges, whatever the text.
    #[test]
    fn analyzer_is_total(text in ".{0,300}") {
        let analysis = analyze(&text);
        prop_assert!(analysis.confidence <= 95);
        prop_assert!(analysis.differentials.len() <= 5);
        prop_assert!(analysis.suggested_questions.len() <= 5);
        for symptom in &analysis.symptoms {
            prop_assert!(symptom.severity <= 10);
        }
        for differential in &analysis.differentials {
            prop_assert!(differential.probability <= 0.95);
            prop_assert!(differential.probability >= 0.0);
        }
    }

    /// Severity clamps hold for any magnitude of stacked modifiers.
    #[test]
    fn stacked_modifiers_stay_clamped(
        boosters in prop::collection::vec(
            prop::sample::select(vec!["worst", "severe", "crushing", "10/10", "excruciating"]),
            0..6,
        ),
        reducers in prop::collection::vec(
            prop::sample::select(vec!["mild", "slight", "occasional", "1/10"]),
            0..6,
        ),
    ) {
        let text = format!(
            "{} {} chest pain and cough",
            boosters.join(" "),
            reducers.join(" "),
        );
        let analysis = analyze(&text);
        for symptom in &analysis.symptoms {
            prop_assert!(symptom.severity <= 10);
        }
    }

    /// Negated mentions never contribute red flags or body systems.
    #[test]
    fn negation_excludes_from_aggregates(
        cue in prop::sample::select(vec!["no", "denies", "without"]),
        term in prop::sample::select(vec!["chest pain", "seizure", "coughing up blood"]),
    ) {
        let analysis = analyze(&format!("{cue} {term}"));
        let symptom = analysis
            .symptoms
            .iter()
            .find(|s| s.term == term)
            .expect("mention is still recorded");
        prop_assert!(symptom.is_negated);
        prop_assert!(analysis.red_flags.is_empty());
        prop_assert!(analysis.body_systems.is_empty());
        prop_assert!(analysis.differentials.is_empty());
    }

    /// Adding a red-flag symptom never lowers acuity.
    #[test]
    fn acuity_is_monotonic_in_red_flags(base in prop::sample::select(vec![
        "mild cough",
        "headache for 2 days",
        "abdominal pain",
    ])) {
        let without = analyze(base);
        let with = analyze(&format!("{base} and seizure"));
        prop_assert!(with.acuity >= without.acuity);
    }
}

#[test]
fn acuity_tiers_rank_as_expected() {
    // severity below 5 stays routine
    assert_eq!(analyze("slight cough").acuity, Acuity::Routine);
    // severity >= 5 without red flags is semi-urgent
    assert_eq!(analyze("fever").acuity, Acuity::SemiUrgent);
    // a single red flag is urgent
    assert_eq!(analyze("blood in stool").acuity, Acuity::Urgent);
    // severity >= 9 is emergent
    assert_eq!(analyze("seizure").acuity, Acuity::Emergent);
}
