//! Symptom lexicon and severity-modifier phrase tables.
//!
//! Each [`LexiconEntry`] maps a list of synonymous terms to a body system,
//! a base severity, and a red-flag marker. The analyzer takes the first
//! matching term per entry, so order the synonyms from most to least
//! specific.

use sentra_core::models::BodySystem;

pub struct LexiconEntry {
    pub terms: &'static [&'static str],
    pub body_system: BodySystem,
    /// 0–10 before the global severity modifier is applied.
    pub base_severity: u8,
    /// Presence alone warrants escalated urgency.
    pub red_flag: bool,
    pub icd10_category: &'static str,
}

/// Phrases that raise the global severity modifier, with their boost.
pub const SEVERITY_BOOSTERS: &[(&str, i32)] = &[
    ("worst", 4),
    ("excruciating", 4),
    ("unbearable", 4),
    ("10/10", 4),
    ("9/10", 3),
    ("severe", 3),
    ("crushing", 3),
    ("8/10", 2),
    ("intense", 2),
    ("sudden onset", 2),
    ("getting worse", 2),
    ("worsening", 2),
];

/// Phrases that lower the global severity modifier, with their reduction.
pub const SEVERITY_REDUCERS: &[(&str, i32)] = &[
    ("1/10", -3),
    ("2/10", -2),
    ("mild", -2),
    ("slight", -2),
    ("3/10", -1),
    ("minor", -1),
    ("occasional", -1),
    ("intermittent", -1),
    ("improving", -1),
];

/// Negation cues scanned for in the window preceding a symptom match.
/// Trailing spaces keep "no " from firing inside words like "normal".
pub const NEGATION_CUES: &[&str] = &[
    "no ",
    "not ",
    "denies ",
    "denied ",
    "without ",
    "negative for ",
    "ruled out ",
    "free of ",
    "resolved ",
    "never had ",
];

pub const SYMPTOM_LEXICON: &[LexiconEntry] = &[
    // Cardiovascular
    LexiconEntry {
        terms: &["chest pain", "chest pressure", "chest tightness", "angina"],
        body_system: BodySystem::Cardiovascular,
        base_severity: 8,
        red_flag: true,
        icd10_category: "I20-I25",
    },
    LexiconEntry {
        terms: &[
            "radiating to the arm",
            "radiating to the jaw",
            "radiating down the arm",
            "radiating",
        ],
        body_system: BodySystem::Cardiovascular,
        base_severity: 7,
        red_flag: true,
        icd10_category: "I20-I25",
    },
    LexiconEntry {
        terms: &["palpitations", "racing heart", "heart racing", "skipped beats"],
        body_system: BodySystem::Cardiovascular,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R00",
    },
    LexiconEntry {
        terms: &["passed out", "fainted", "syncope", "blacked out"],
        body_system: BodySystem::Cardiovascular,
        base_severity: 7,
        red_flag: true,
        icd10_category: "R55",
    },
    LexiconEntry {
        terms: &["leg swelling", "ankle swelling", "swelling in the legs", "edema"],
        body_system: BodySystem::Cardiovascular,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R60",
    },
    // Respiratory
    LexiconEntry {
        terms: &[
            "shortness of breath",
            "short of breath",
            "difficulty breathing",
            "trouble breathing",
            "can't breathe",
            "cannot breathe",
            "dyspnea",
        ],
        body_system: BodySystem::Respiratory,
        base_severity: 8,
        red_flag: true,
        icd10_category: "R06",
    },
    LexiconEntry {
        terms: &["coughing up blood", "coughing blood", "hemoptysis"],
        body_system: BodySystem::Respiratory,
        base_severity: 9,
        red_flag: true,
        icd10_category: "R04.2",
    },
    LexiconEntry {
        terms: &["coughing", "cough"],
        body_system: BodySystem::Respiratory,
        base_severity: 3,
        red_flag: false,
        icd10_category: "R05",
    },
    LexiconEntry {
        terms: &["wheezing", "wheeze"],
        body_system: BodySystem::Respiratory,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R06.2",
    },
    // Neurological
    LexiconEntry {
        terms: &["worst headache", "thunderclap headache"],
        body_system: BodySystem::Neurological,
        base_severity: 10,
        red_flag: true,
        icd10_category: "I60",
    },
    LexiconEntry {
        terms: &["headache", "head ache", "migraine"],
        body_system: BodySystem::Neurological,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R51",
    },
    LexiconEntry {
        terms: &[
            "weakness on one side",
            "one-sided weakness",
            "facial droop",
            "slurred speech",
        ],
        body_system: BodySystem::Neurological,
        base_severity: 9,
        red_flag: true,
        icd10_category: "I63",
    },
    LexiconEntry {
        terms: &["seizure", "convulsion"],
        body_system: BodySystem::Neurological,
        base_severity: 9,
        red_flag: true,
        icd10_category: "R56",
    },
    LexiconEntry {
        terms: &["confusion", "confused", "disoriented", "altered mental status"],
        body_system: BodySystem::Neurological,
        base_severity: 8,
        red_flag: true,
        icd10_category: "R41",
    },
    LexiconEntry {
        terms: &["numbness", "tingling", "pins and needles"],
        body_system: BodySystem::Neurological,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R20",
    },
    LexiconEntry {
        terms: &["dizziness", "dizzy", "lightheaded", "light-headed", "vertigo"],
        body_system: BodySystem::Neurological,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R42",
    },
    // Gastrointestinal
    LexiconEntry {
        terms: &["vomiting blood", "blood in vomit", "hematemesis"],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 9,
        red_flag: true,
        icd10_category: "K92.0",
    },
    LexiconEntry {
        terms: &[
            "blood in stool",
            "bloody stool",
            "rectal bleeding",
            "black tarry stool",
            "melena",
        ],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 7,
        red_flag: true,
        icd10_category: "K92.1",
    },
    LexiconEntry {
        terms: &[
            "abdominal pain",
            "stomach pain",
            "belly pain",
            "stomach ache",
            "abdominal cramping",
        ],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R10",
    },
    LexiconEntry {
        terms: &["nausea", "nauseous", "vomiting", "throwing up"],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R11",
    },
    LexiconEntry {
        terms: &["diarrhea", "loose stools"],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 3,
        red_flag: false,
        icd10_category: "R19.7",
    },
    LexiconEntry {
        terms: &["constipation", "constipated"],
        body_system: BodySystem::Gastrointestinal,
        base_severity: 2,
        red_flag: false,
        icd10_category: "K59.0",
    },
    // Genitourinary
    LexiconEntry {
        terms: &[
            "burning urination",
            "burning when urinating",
            "painful urination",
            "dysuria",
        ],
        body_system: BodySystem::Genitourinary,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R30",
    },
    LexiconEntry {
        terms: &["blood in urine", "bloody urine", "hematuria"],
        body_system: BodySystem::Genitourinary,
        base_severity: 6,
        red_flag: false,
        icd10_category: "R31",
    },
    LexiconEntry {
        terms: &["frequent urination", "urinating frequently", "urinary frequency"],
        body_system: BodySystem::Genitourinary,
        base_severity: 3,
        red_flag: false,
        icd10_category: "R35",
    },
    // Musculoskeletal
    LexiconEntry {
        terms: &["back pain", "backache"],
        body_system: BodySystem::Musculoskeletal,
        base_severity: 4,
        red_flag: false,
        icd10_category: "M54",
    },
    LexiconEntry {
        terms: &["calf pain", "leg pain"],
        body_system: BodySystem::Musculoskeletal,
        base_severity: 4,
        red_flag: false,
        icd10_category: "M79.6",
    },
    LexiconEntry {
        terms: &["joint pain", "knee pain", "shoulder pain", "arthralgia"],
        body_system: BodySystem::Musculoskeletal,
        base_severity: 3,
        red_flag: false,
        icd10_category: "M25.5",
    },
    // Dermatological
    LexiconEntry {
        terms: &["hives", "urticaria", "rash"],
        body_system: BodySystem::Dermatological,
        base_severity: 3,
        red_flag: false,
        icd10_category: "R21",
    },
    LexiconEntry {
        terms: &["laceration", "deep cut", "open wound"],
        body_system: BodySystem::Dermatological,
        base_severity: 4,
        red_flag: false,
        icd10_category: "T14.1",
    },
    // Endocrine
    LexiconEntry {
        terms: &["excessive thirst", "very thirsty", "polydipsia"],
        body_system: BodySystem::Endocrine,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R63.1",
    },
    LexiconEntry {
        terms: &["heat intolerance", "cold intolerance"],
        body_system: BodySystem::Endocrine,
        base_severity: 3,
        red_flag: false,
        icd10_category: "E07",
    },
    // Hematologic
    LexiconEntry {
        terms: &["uncontrolled bleeding", "won't stop bleeding", "bleeding heavily"],
        body_system: BodySystem::Hematologic,
        base_severity: 9,
        red_flag: true,
        icd10_category: "R58",
    },
    LexiconEntry {
        terms: &["easy bruising", "bruising easily", "unexplained bruising"],
        body_system: BodySystem::Hematologic,
        base_severity: 5,
        red_flag: false,
        icd10_category: "D69",
    },
    // Psychiatric
    LexiconEntry {
        terms: &["suicidal", "thoughts of hurting myself", "want to hurt myself"],
        body_system: BodySystem::Psychiatric,
        base_severity: 10,
        red_flag: true,
        icd10_category: "R45.851",
    },
    LexiconEntry {
        terms: &["depressed", "depression", "hopeless", "feeling down"],
        body_system: BodySystem::Psychiatric,
        base_severity: 5,
        red_flag: false,
        icd10_category: "F32",
    },
    LexiconEntry {
        terms: &["anxiety", "anxious", "panic attack"],
        body_system: BodySystem::Psychiatric,
        base_severity: 4,
        red_flag: false,
        icd10_category: "F41",
    },
    LexiconEntry {
        terms: &["can't sleep", "cannot sleep", "insomnia", "trouble sleeping"],
        body_system: BodySystem::Psychiatric,
        base_severity: 3,
        red_flag: false,
        icd10_category: "G47.0",
    },
    // Ear / nose / throat
    LexiconEntry {
        terms: &["difficulty swallowing", "trouble swallowing", "dysphagia"],
        body_system: BodySystem::EarNoseThroat,
        base_severity: 6,
        red_flag: false,
        icd10_category: "R13",
    },
    LexiconEntry {
        terms: &["sore throat", "throat pain"],
        body_system: BodySystem::EarNoseThroat,
        base_severity: 3,
        red_flag: false,
        icd10_category: "J02",
    },
    LexiconEntry {
        terms: &["ear pain", "earache", "ear ache"],
        body_system: BodySystem::EarNoseThroat,
        base_severity: 3,
        red_flag: false,
        icd10_category: "H92.0",
    },
    LexiconEntry {
        terms: &["nosebleed", "nose bleed", "epistaxis"],
        body_system: BodySystem::EarNoseThroat,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R04.0",
    },
    // Ophthalmic
    LexiconEntry {
        terms: &["vision loss", "lost vision", "sudden blindness", "double vision"],
        body_system: BodySystem::Ophthalmic,
        base_severity: 8,
        red_flag: true,
        icd10_category: "H53-H54",
    },
    LexiconEntry {
        terms: &["eye pain", "red eye"],
        body_system: BodySystem::Ophthalmic,
        base_severity: 4,
        red_flag: false,
        icd10_category: "H57.1",
    },
    // Immunologic
    LexiconEntry {
        terms: &["throat swelling", "tongue swelling", "throat closing", "anaphylaxis"],
        body_system: BodySystem::Immunologic,
        base_severity: 10,
        red_flag: true,
        icd10_category: "T78.2",
    },
    LexiconEntry {
        terms: &["allergic reaction", "allergy flare"],
        body_system: BodySystem::Immunologic,
        base_severity: 5,
        red_flag: false,
        icd10_category: "T78.4",
    },
    // Reproductive
    LexiconEntry {
        terms: &["vaginal bleeding", "heavy period"],
        body_system: BodySystem::Reproductive,
        base_severity: 6,
        red_flag: false,
        icd10_category: "N93",
    },
    LexiconEntry {
        terms: &["pelvic pain"],
        body_system: BodySystem::Reproductive,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R10.2",
    },
    // Constitutional
    LexiconEntry {
        terms: &["fever", "febrile", "high temperature"],
        body_system: BodySystem::Constitutional,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R50",
    },
    LexiconEntry {
        terms: &["night sweats", "chills"],
        body_system: BodySystem::Constitutional,
        base_severity: 4,
        red_flag: false,
        icd10_category: "R61",
    },
    LexiconEntry {
        terms: &["weight loss", "losing weight", "lost weight"],
        body_system: BodySystem::Constitutional,
        base_severity: 5,
        red_flag: false,
        icd10_category: "R63.4",
    },
    LexiconEntry {
        terms: &["fatigue", "exhausted", "exhaustion", "no energy", "tired all the time"],
        body_system: BodySystem::Constitutional,
        base_severity: 3,
        red_flag: false,
        icd10_category: "R53",
    },
];
