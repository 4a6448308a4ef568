//! Differential-diagnosis rule table.
//!
//! A condition is included when any `required` term matches a positive
//! symptom term by bidirectional substring containment. Probability is
//! `base_probability + boost × matched supporting terms`, capped at 0.95.

pub struct DifferentialRule {
    pub condition: &'static str,
    pub icd10_category: &'static str,
    /// Any one of these matching a positive symptom includes the condition.
    pub required: &'static [&'static str],
    /// Each match against the positive symptoms adds `boost`.
    pub supporting: &'static [&'static str],
    pub base_probability: f64,
    pub boost: f64,
}

pub const PROBABILITY_CAP: f64 = 0.95;

/// Ranked output keeps at most this many entries.
pub const MAX_DIFFERENTIALS: usize = 5;

pub const DIFFERENTIAL_RULES: &[DifferentialRule] = &[
    DifferentialRule {
        condition: "Acute Coronary Syndrome",
        icd10_category: "I21",
        required: &["chest pain", "chest pressure", "chest tightness", "angina"],
        supporting: &["radiating", "shortness of breath", "nausea", "palpitations", "syncope"],
        base_probability: 0.40,
        boost: 0.15,
    },
    DifferentialRule {
        condition: "Pulmonary Embolism",
        icd10_category: "I26",
        required: &["shortness of breath", "short of breath", "dyspnea", "difficulty breathing"],
        supporting: &["chest pain", "coughing up blood", "calf pain", "palpitations"],
        base_probability: 0.25,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Stroke / TIA",
        icd10_category: "I63",
        required: &["weakness on one side", "facial droop", "slurred speech", "one-sided weakness"],
        supporting: &["headache", "confusion", "dizziness", "vision loss", "numbness"],
        base_probability: 0.45,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Subarachnoid Hemorrhage",
        icd10_category: "I60",
        required: &["worst headache", "thunderclap headache"],
        supporting: &["nausea", "vomiting", "confusion", "seizure"],
        base_probability: 0.50,
        boost: 0.15,
    },
    DifferentialRule {
        condition: "Anaphylaxis",
        icd10_category: "T78.2",
        required: &["throat swelling", "tongue swelling", "throat closing", "anaphylaxis"],
        supporting: &["hives", "rash", "shortness of breath", "wheezing"],
        base_probability: 0.55,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Upper GI Bleed",
        icd10_category: "K92",
        required: &["vomiting blood", "hematemesis", "melena", "black tarry stool"],
        supporting: &["abdominal pain", "dizziness", "fatigue"],
        base_probability: 0.50,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Pneumonia",
        icd10_category: "J18",
        required: &["cough", "coughing"],
        supporting: &["fever", "shortness of breath", "chills", "chest pain"],
        base_probability: 0.30,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Asthma Exacerbation",
        icd10_category: "J45.901",
        required: &["wheezing", "wheeze"],
        supporting: &["shortness of breath", "cough", "chest tightness"],
        base_probability: 0.35,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Heart Failure Exacerbation",
        icd10_category: "I50",
        required: &["leg swelling", "ankle swelling", "edema"],
        supporting: &["shortness of breath", "fatigue", "weight"],
        base_probability: 0.30,
        boost: 0.10,
    },
    DifferentialRule {
        condition: "Migraine",
        icd10_category: "G43",
        required: &["headache", "migraine"],
        supporting: &["nausea", "vision", "dizziness"],
        base_probability: 0.30,
        boost: 0.10,
    },
    DifferentialRule {
        condition: "Gastroenteritis",
        icd10_category: "A09",
        required: &["diarrhea", "vomiting", "loose stools"],
        supporting: &["fever", "abdominal pain", "chills", "nausea"],
        base_probability: 0.30,
        boost: 0.10,
    },
    DifferentialRule {
        condition: "Appendicitis",
        icd10_category: "K35",
        required: &["abdominal pain", "belly pain", "stomach pain"],
        supporting: &["nausea", "vomiting", "fever"],
        base_probability: 0.25,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Urinary Tract Infection",
        icd10_category: "N39.0",
        required: &["burning urination", "painful urination", "dysuria", "frequent urination"],
        supporting: &["fever", "blood in urine", "abdominal pain"],
        base_probability: 0.40,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Deep Vein Thrombosis",
        icd10_category: "I82.4",
        required: &["calf pain", "leg swelling"],
        supporting: &["leg pain", "shortness of breath"],
        base_probability: 0.25,
        boost: 0.12,
    },
    DifferentialRule {
        condition: "Major Depressive Episode",
        icd10_category: "F32",
        required: &["depressed", "depression", "hopeless", "feeling down"],
        supporting: &["insomnia", "fatigue", "anxiety", "weight loss"],
        base_probability: 0.35,
        boost: 0.10,
    },
    DifferentialRule {
        condition: "Hyperglycemia / Uncontrolled Diabetes",
        icd10_category: "E11.65",
        required: &["excessive thirst", "polydipsia", "very thirsty"],
        supporting: &["frequent urination", "fatigue", "weight loss"],
        base_probability: 0.30,
        boost: 0.12,
    },
];
