//! Follow-up question tables, keyed by body system.

use sentra_core::models::BodySystem;

pub struct QuestionSet {
    pub system: BodySystem,
    pub questions: &'static [&'static str],
}

/// Per matched system the analyzer takes up to this many questions.
pub const QUESTIONS_PER_SYSTEM: usize = 2;

/// Overall cap on suggested questions.
pub const MAX_QUESTIONS: usize = 5;

/// Fallback questions when no body system matched.
pub const GENERAL_QUESTIONS: &[&str] = &[
    "Can you describe your symptoms in more detail?",
    "When did your symptoms begin?",
    "Have your symptoms been getting better or worse?",
];

pub const QUESTION_SETS: &[QuestionSet] = &[
    QuestionSet {
        system: BodySystem::Cardiovascular,
        questions: &[
            "Does the pain spread to your arm, jaw, or back?",
            "Does the discomfort change with exertion or rest?",
            "Have you ever been told you have heart problems?",
        ],
    },
    QuestionSet {
        system: BodySystem::Respiratory,
        questions: &[
            "Are you short of breath at rest or only with activity?",
            "Are you bringing anything up when you cough?",
            "Have you had a fever alongside the breathing trouble?",
        ],
    },
    QuestionSet {
        system: BodySystem::Neurological,
        questions: &[
            "Did the symptoms come on suddenly or gradually?",
            "Any weakness, numbness, or trouble speaking?",
            "Is this different from headaches you have had before?",
        ],
    },
    QuestionSet {
        system: BodySystem::Gastrointestinal,
        questions: &[
            "Where exactly is the pain, and does it move?",
            "Any blood in your vomit or stool?",
            "When did you last eat, and did that change anything?",
        ],
    },
    QuestionSet {
        system: BodySystem::Genitourinary,
        questions: &[
            "Any burning or pain when you urinate?",
            "Have you noticed blood in your urine?",
        ],
    },
    QuestionSet {
        system: BodySystem::Musculoskeletal,
        questions: &[
            "Did the pain start after an injury or activity?",
            "Does anything make the pain better or worse?",
        ],
    },
    QuestionSet {
        system: BodySystem::Dermatological,
        questions: &[
            "Is the rash spreading, and is it itchy or painful?",
            "Any new medications, foods, or products recently?",
        ],
    },
    QuestionSet {
        system: BodySystem::Endocrine,
        questions: &[
            "Have you noticed changes in thirst, appetite, or weight?",
            "Any family history of thyroid disease or diabetes?",
        ],
    },
    QuestionSet {
        system: BodySystem::Hematologic,
        questions: &[
            "Are you taking any blood thinners?",
            "Have you had unusual bruising or bleeding before?",
        ],
    },
    QuestionSet {
        system: BodySystem::Psychiatric,
        questions: &[
            "Are you having any thoughts of harming yourself or others?",
            "How has your sleep and appetite been?",
        ],
    },
    QuestionSet {
        system: BodySystem::EarNoseThroat,
        questions: &[
            "Any trouble swallowing or breathing?",
            "Have you had a fever or swollen glands?",
        ],
    },
    QuestionSet {
        system: BodySystem::Ophthalmic,
        questions: &[
            "Is the vision change in one eye or both?",
            "Any flashes of light, floaters, or eye pain?",
        ],
    },
    QuestionSet {
        system: BodySystem::Immunologic,
        questions: &[
            "Any swelling of the lips, tongue, or throat?",
            "What were you exposed to before the reaction started?",
        ],
    },
    QuestionSet {
        system: BodySystem::Reproductive,
        questions: &[
            "When was your last menstrual period?",
            "Is there any chance you could be pregnant?",
        ],
    },
    QuestionSet {
        system: BodySystem::Constitutional,
        questions: &[
            "Have you measured your temperature?",
            "Any unintentional weight change or night sweats?",
        ],
    },
];

/// Questions for one system, or `None` if the system has no set.
pub fn for_system(system: BodySystem) -> Option<&'static [&'static str]> {
    QUESTION_SETS
        .iter()
        .find(|set| set.system == system)
        .map(|set| set.questions)
}
