use serde::{Deserialize, Serialize};

/// Body system a symptom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySystem {
    Cardiovascular,
    Respiratory,
    Neurological,
    Gastrointestinal,
    Genitourinary,
    Musculoskeletal,
    Dermatological,
    Endocrine,
    Hematologic,
    Psychiatric,
    EarNoseThroat,
    Ophthalmic,
    Immunologic,
    Reproductive,
    Constitutional,
}

impl BodySystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodySystem::Cardiovascular => "cardiovascular",
            BodySystem::Respiratory => "respiratory",
            BodySystem::Neurological => "neurological",
            BodySystem::Gastrointestinal => "gastrointestinal",
            BodySystem::Genitourinary => "genitourinary",
            BodySystem::Musculoskeletal => "musculoskeletal",
            BodySystem::Dermatological => "dermatological",
            BodySystem::Endocrine => "endocrine",
            BodySystem::Hematologic => "hematologic",
            BodySystem::Psychiatric => "psychiatric",
            BodySystem::EarNoseThroat => "ear/nose/throat",
            BodySystem::Ophthalmic => "ophthalmic",
            BodySystem::Immunologic => "immunologic",
            BodySystem::Reproductive => "reproductive",
            BodySystem::Constitutional => "constitutional",
        }
    }
}

/// A single symptom mention found in the complaint text.
///
/// Negated mentions ("no chest pain") are kept for the record but excluded
/// from red flags, body-system aggregation, and differential matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntity {
    pub term: String,
    pub body_system: BodySystem,
    /// Severity after the global modifier, clamped to 0–10.
    pub severity: u8,
    pub is_negated: bool,
    pub is_red_flag: bool,
}

/// Onset classification derived from the estimated duration in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    /// Under 14 days.
    Acute,
    /// 14 to 90 days.
    Subacute,
    /// 90 days or longer.
    Chronic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationInfo {
    /// The matched span of the original text, e.g. `"for 2 days"`.
    pub raw: String,
    pub estimated_days: f64,
    pub class: DurationClass,
}

impl DurationInfo {
    pub fn classify(days: f64) -> DurationClass {
        if days < 14.0 {
            DurationClass::Acute
        } else if days < 90.0 {
            DurationClass::Subacute
        } else {
            DurationClass::Chronic
        }
    }
}

/// Urgency tier of a presentation. Ordering is meaningful: later variants
/// are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acuity {
    Routine,
    SemiUrgent,
    Urgent,
    Emergent,
}

impl Acuity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acuity::Routine => "routine",
            Acuity::SemiUrgent => "semi-urgent",
            Acuity::Urgent => "urgent",
            Acuity::Emergent => "emergent",
        }
    }

    /// One tier up, saturating at `Emergent`.
    pub fn escalate(self) -> Acuity {
        match self {
            Acuity::Routine => Acuity::SemiUrgent,
            Acuity::SemiUrgent => Acuity::Urgent,
            Acuity::Urgent | Acuity::Emergent => Acuity::Emergent,
        }
    }
}

/// A candidate condition ranked by estimated probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentialEntry {
    pub condition: String,
    /// Additive probability, capped at 0.95.
    pub probability: f64,
    pub icd10_category: String,
    pub related_symptoms: Vec<String>,
}

/// Structured report over a free-text chief complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiefComplaintAnalysis {
    pub original_text: String,
    pub normalized_text: String,
    pub symptoms: Vec<SymptomEntity>,
    /// Systems with at least one positive (non-negated) symptom, in match order.
    pub body_systems: Vec<BodySystem>,
    pub duration: Option<DurationInfo>,
    pub acuity: Acuity,
    pub red_flags: Vec<String>,
    /// Top differentials, sorted by descending probability, at most five.
    pub differentials: Vec<DifferentialEntry>,
    pub suggested_questions: Vec<String>,
    /// 0–100, capped at 95.
    pub confidence: u8,
}
