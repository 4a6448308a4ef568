//! The chief-complaint analysis pass.

use sentra_core::models::{
    Acuity, BodySystem, ChiefComplaintAnalysis, DifferentialEntry, SymptomEntity,
};
use tracing::debug;

use crate::differentials::{DIFFERENTIAL_RULES, MAX_DIFFERENTIALS, PROBABILITY_CAP};
use crate::duration;
use crate::lexicon::{NEGATION_CUES, SEVERITY_BOOSTERS, SEVERITY_REDUCERS, SYMPTOM_LEXICON};
use crate::questions::{self, GENERAL_QUESTIONS, MAX_QUESTIONS, QUESTIONS_PER_SYSTEM};

/// Bytes scanned backwards from a symptom match for negation cues.
const NEGATION_WINDOW: usize = 40;

/// Analyze a free-text chief complaint into a structured report.
///
/// Total over its input: empty or whitespace-only text yields a
/// zero-confidence result with a single generic follow-up question.
pub fn analyze(text: &str) -> ChiefComplaintAnalysis {
    if text.trim().is_empty() {
        return empty_analysis(text);
    }

    let normalized = normalize(text);
    let modifier = severity_modifier(&normalized);
    let symptoms = match_symptoms(&normalized, modifier);

    let positive: Vec<&SymptomEntity> = symptoms.iter().filter(|s| !s.is_negated).collect();

    let red_flags: Vec<String> = positive
        .iter()
        .filter(|s| s.is_red_flag)
        .map(|s| s.term.clone())
        .collect();

    let mut body_systems: Vec<BodySystem> = Vec::new();
    for symptom in &positive {
        if !body_systems.contains(&symptom.body_system) {
            body_systems.push(symptom.body_system);
        }
    }

    let duration = duration::extract(&normalized);
    let acuity = grade_acuity(&positive, red_flags.len(), duration.as_ref().map(|d| d.estimated_days));
    let differentials = rank_differentials(&positive);
    let suggested_questions = suggest_questions(&body_systems);

    let mut confidence = 30u32 + (symptoms.len() as u32 * 8).min(30);
    if duration.is_some() {
        confidence += 10;
    }
    if !differentials.is_empty() {
        confidence += 15;
    }
    if !body_systems.is_empty() {
        confidence += 15;
    }
    let confidence = confidence.min(95) as u8;

    debug!(
        symptoms = symptoms.len(),
        red_flags = red_flags.len(),
        acuity = acuity.as_str(),
        confidence,
        "complaint analyzed"
    );

    ChiefComplaintAnalysis {
        original_text: text.to_string(),
        normalized_text: normalized,
        symptoms,
        body_systems,
        duration,
        acuity,
        red_flags,
        differentials,
        suggested_questions,
        confidence,
    }
}

fn empty_analysis(text: &str) -> ChiefComplaintAnalysis {
    ChiefComplaintAnalysis {
        original_text: text.to_string(),
        normalized_text: String::new(),
        symptoms: Vec::new(),
        body_systems: Vec::new(),
        duration: None,
        acuity: Acuity::Routine,
        red_flags: Vec::new(),
        differentials: Vec::new(),
        suggested_questions: vec![GENERAL_QUESTIONS[0].to_string()],
        confidence: 0,
    }
}

/// Lowercase, strip punctuation except `'` `/` `.` `-`, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut prev_space = true;
    for c in lowered.chars() {
        let keep = c.is_alphanumeric() || matches!(c, '\'' | '/' | '.' | '-');
        if keep {
            out.push(c);
            prev_space = false;
        } else if !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    out.trim_end().to_string()
}

/// Sum of all booster and reducer phrases found anywhere in the text.
/// The modifier is global, not scoped to the symptom it sits next to.
pub fn severity_modifier(normalized: &str) -> i32 {
    let boost: i32 = SEVERITY_BOOSTERS
        .iter()
        .filter(|(phrase, _)| normalized.contains(phrase))
        .map(|(_, delta)| delta)
        .sum();
    let reduce: i32 = SEVERITY_REDUCERS
        .iter()
        .filter(|(phrase, _)| normalized.contains(phrase))
        .map(|(_, delta)| delta)
        .sum();
    boost + reduce
}

/// One pass over the lexicon: first matching term per entry wins, negation
/// is checked in the window immediately preceding the match.
fn match_symptoms(normalized: &str, modifier: i32) -> Vec<SymptomEntity> {
    let mut symptoms = Vec::new();
    for entry in SYMPTOM_LEXICON {
        for term in entry.terms {
            if let Some(pos) = normalized.find(term) {
                let negated = is_negated(normalized, pos);
                let applied = if negated { 0 } else { modifier };
                let severity = (entry.base_severity as i32 + applied).clamp(0, 10) as u8;
                symptoms.push(SymptomEntity {
                    term: (*term).to_string(),
                    body_system: entry.body_system,
                    severity,
                    is_negated: negated,
                    is_red_flag: entry.red_flag,
                });
                break;
            }
        }
    }
    symptoms
}

fn is_negated(normalized: &str, match_start: usize) -> bool {
    let mut window_start = match_start.saturating_sub(NEGATION_WINDOW);
    while !normalized.is_char_boundary(window_start) {
        window_start -= 1;
    }
    let window = &normalized[window_start..match_start];
    NEGATION_CUES.iter().any(|cue| window.contains(cue))
}

/// Acuity ladder over max positive severity, red-flag count, and onset.
fn grade_acuity(positive: &[&SymptomEntity], red_flag_count: usize, duration_days: Option<f64>) -> Acuity {
    let max_severity = positive.iter().map(|s| s.severity).max().unwrap_or(0);

    let mut acuity = Acuity::Routine;
    if max_severity >= 5 {
        acuity = Acuity::SemiUrgent;
    }
    if max_severity >= 7 || red_flag_count >= 1 {
        acuity = Acuity::Urgent;
    }
    if max_severity >= 9 || red_flag_count >= 2 {
        acuity = Acuity::Emergent;
    }

    // Onset within a day bumps the tier once more.
    if let Some(days) = duration_days
        && days < 1.0
    {
        acuity = acuity.escalate();
    }
    acuity
}

fn terms_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn rank_differentials(positive: &[&SymptomEntity]) -> Vec<DifferentialEntry> {
    let mut entries: Vec<DifferentialEntry> = Vec::new();

    for rule in DIFFERENTIAL_RULES {
        let required_hit = rule
            .required
            .iter()
            .any(|req| positive.iter().any(|s| terms_match(&s.term, req)));
        if !required_hit {
            continue;
        }

        let related: Vec<String> = rule
            .supporting
            .iter()
            .filter(|sup| positive.iter().any(|s| terms_match(&s.term, sup)))
            .map(|sup| (*sup).to_string())
            .collect();

        let probability =
            (rule.base_probability + rule.boost * related.len() as f64).min(PROBABILITY_CAP);

        entries.push(DifferentialEntry {
            condition: rule.condition.to_string(),
            probability,
            icd10_category: rule.icd10_category.to_string(),
            related_symptoms: related,
        });
    }

    entries.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(MAX_DIFFERENTIALS);
    entries
}

fn suggest_questions(body_systems: &[BodySystem]) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();

    for system in body_systems {
        if let Some(set) = questions::for_system(*system) {
            for question in set.iter().take(QUESTIONS_PER_SYSTEM) {
                if questions.len() >= MAX_QUESTIONS {
                    return questions;
                }
                if !questions.iter().any(|q| q == question) {
                    questions.push((*question).to_string());
                }
            }
        }
    }

    if questions.is_empty() {
        questions.extend(
            GENERAL_QUESTIONS
                .iter()
                .take(QUESTIONS_PER_SYSTEM)
                .map(|q| (*q).to_string()),
        );
    }
    questions
}
