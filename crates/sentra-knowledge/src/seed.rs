//! Seed tables for the reference fact store.
//!
//! Content here is a representative slice of a clinical knowledge base,
//! sufficient for development and tests. Drug and condition names are
//! stored lowercase; lookups lowercase their inputs.

use sentra_core::models::IssueSeverity;

use crate::entries::{
    ContraindicationRule, CrossReactivityGroup, DosageGuideline, DrugInteraction,
    ExtendedInteraction, RuleType,
};

/// Curated, severity-bucketed interaction pairs.
pub const CURATED_INTERACTIONS: &[DrugInteraction] = &[
    DrugInteraction {
        drug_1: "nitroglycerin",
        drug_2: "sildenafil",
        severity: IssueSeverity::Critical,
        description: "Nitrates with PDE5 inhibitors cause profound, refractory hypotension.",
    },
    DrugInteraction {
        drug_1: "isosorbide",
        drug_2: "tadalafil",
        severity: IssueSeverity::Critical,
        description: "Nitrates with PDE5 inhibitors cause profound, refractory hypotension.",
    },
    DrugInteraction {
        drug_1: "methotrexate",
        drug_2: "trimethoprim",
        severity: IssueSeverity::Critical,
        description: "Additive antifolate effect; risk of pancytopenia.",
    },
    DrugInteraction {
        drug_1: "warfarin",
        drug_2: "aspirin",
        severity: IssueSeverity::High,
        description: "Additive anticoagulant and antiplatelet effect; major bleeding risk.",
    },
    DrugInteraction {
        drug_1: "warfarin",
        drug_2: "ibuprofen",
        severity: IssueSeverity::High,
        description: "NSAIDs raise INR and add GI bleeding risk on warfarin.",
    },
    DrugInteraction {
        drug_1: "warfarin",
        drug_2: "ciprofloxacin",
        severity: IssueSeverity::High,
        description: "Fluoroquinolones potentiate warfarin; monitor INR closely.",
    },
    DrugInteraction {
        drug_1: "lisinopril",
        drug_2: "spironolactone",
        severity: IssueSeverity::High,
        description: "ACE inhibitor with potassium-sparing diuretic; hyperkalemia risk.",
    },
    DrugInteraction {
        drug_1: "lisinopril",
        drug_2: "potassium chloride",
        severity: IssueSeverity::High,
        description: "ACE inhibitor with potassium supplementation; hyperkalemia risk.",
    },
    DrugInteraction {
        drug_1: "digoxin",
        drug_2: "amiodarone",
        severity: IssueSeverity::High,
        description: "Amiodarone raises digoxin levels; reduce digoxin dose.",
    },
    DrugInteraction {
        drug_1: "simvastatin",
        drug_2: "clarithromycin",
        severity: IssueSeverity::High,
        description: "CYP3A4 inhibition raises statin exposure; rhabdomyolysis risk.",
    },
    DrugInteraction {
        drug_1: "tramadol",
        drug_2: "sertraline",
        severity: IssueSeverity::High,
        description: "Serotonergic opioid with SSRI; serotonin syndrome risk.",
    },
    DrugInteraction {
        drug_1: "tramadol",
        drug_2: "fluoxetine",
        severity: IssueSeverity::High,
        description: "Serotonergic opioid with SSRI; serotonin syndrome risk.",
    },
    DrugInteraction {
        drug_1: "lithium",
        drug_2: "ibuprofen",
        severity: IssueSeverity::High,
        description: "NSAIDs reduce lithium clearance; toxicity risk.",
    },
    DrugInteraction {
        drug_1: "clopidogrel",
        drug_2: "omeprazole",
        severity: IssueSeverity::Medium,
        description: "CYP2C19 inhibition blunts clopidogrel activation.",
    },
    DrugInteraction {
        drug_1: "levothyroxine",
        drug_2: "calcium carbonate",
        severity: IssueSeverity::Medium,
        description: "Calcium impairs levothyroxine absorption; separate doses.",
    },
];

/// Extended knowledge base scanned by the validation sweep. Wider than the
/// curated set and scored by clinical significance (1–10).
pub const EXTENDED_INTERACTIONS: &[ExtendedInteraction] = &[
    ExtendedInteraction {
        drug_1: "allopurinol",
        drug_2: "azathioprine",
        clinical_significance: 9,
        effect: "Xanthine oxidase inhibition multiplies azathioprine toxicity.",
    },
    ExtendedInteraction {
        drug_1: "amiodarone",
        drug_2: "warfarin",
        clinical_significance: 8,
        effect: "Amiodarone inhibits warfarin metabolism; INR climbs over weeks.",
    },
    ExtendedInteraction {
        drug_1: "verapamil",
        drug_2: "metoprolol",
        clinical_significance: 7,
        effect: "Additive AV-nodal blockade; bradycardia and heart block.",
    },
    ExtendedInteraction {
        drug_1: "potassium chloride",
        drug_2: "spironolactone",
        clinical_significance: 7,
        effect: "Potassium supplement with potassium-sparing diuretic.",
    },
    ExtendedInteraction {
        drug_1: "citalopram",
        drug_2: "ondansetron",
        clinical_significance: 6,
        effect: "Additive QT prolongation.",
    },
    ExtendedInteraction {
        drug_1: "furosemide",
        drug_2: "gentamicin",
        clinical_significance: 6,
        effect: "Additive ototoxicity and nephrotoxicity.",
    },
    ExtendedInteraction {
        drug_1: "prednisone",
        drug_2: "ibuprofen",
        clinical_significance: 5,
        effect: "Corticosteroid with NSAID; GI ulceration risk.",
    },
    ExtendedInteraction {
        drug_1: "amlodipine",
        drug_2: "simvastatin",
        clinical_significance: 5,
        effect: "Amlodipine raises simvastatin exposure; cap statin dose.",
    },
    ExtendedInteraction {
        drug_1: "sertraline",
        drug_2: "ibuprofen",
        clinical_significance: 4,
        effect: "SSRI with NSAID; upper GI bleeding risk.",
    },
    ExtendedInteraction {
        drug_1: "metformin",
        drug_2: "furosemide",
        clinical_significance: 3,
        effect: "Loop diuretics may raise metformin levels modestly.",
    },
    ExtendedInteraction {
        drug_1: "omeprazole",
        drug_2: "iron sulfate",
        clinical_significance: 3,
        effect: "Acid suppression reduces iron absorption.",
    },
    ExtendedInteraction {
        drug_1: "atorvastatin",
        drug_2: "grapefruit",
        clinical_significance: 2,
        effect: "Minor exposure increase at usual dietary amounts.",
    },
];

pub const CONTRAINDICATIONS: &[ContraindicationRule] = &[
    ContraindicationRule {
        drug: "sildenafil",
        condition: "nitrate therapy",
        rule_type: RuleType::Absolute,
        note: "PDE5 inhibitors are contraindicated with any nitrate.",
    },
    ContraindicationRule {
        drug: "metformin",
        condition: "severe renal impairment",
        rule_type: RuleType::Absolute,
        note: "Risk of lactic acidosis below GFR 30.",
    },
    ContraindicationRule {
        drug: "metformin",
        condition: "chronic kidney disease",
        rule_type: RuleType::Relative,
        note: "Dose-reduce and monitor GFR between 30 and 45.",
    },
    ContraindicationRule {
        drug: "propranolol",
        condition: "asthma",
        rule_type: RuleType::Absolute,
        note: "Non-selective beta blockade provokes bronchospasm.",
    },
    ContraindicationRule {
        drug: "metoprolol",
        condition: "severe bradycardia",
        rule_type: RuleType::Absolute,
        note: "Beta blockade worsens bradyarrhythmia.",
    },
    ContraindicationRule {
        drug: "ibuprofen",
        condition: "peptic ulcer",
        rule_type: RuleType::Relative,
        note: "NSAIDs aggravate ulcer disease; add gastroprotection or avoid.",
    },
    ContraindicationRule {
        drug: "ibuprofen",
        condition: "chronic kidney disease",
        rule_type: RuleType::Relative,
        note: "NSAIDs reduce renal perfusion.",
    },
    ContraindicationRule {
        drug: "aspirin",
        condition: "bleeding disorder",
        rule_type: RuleType::Absolute,
        note: "Antiplatelet effect is unacceptable in coagulopathy.",
    },
    ContraindicationRule {
        drug: "warfarin",
        condition: "active bleeding",
        rule_type: RuleType::Absolute,
        note: "Anticoagulation is contraindicated during active hemorrhage.",
    },
    ContraindicationRule {
        drug: "lisinopril",
        condition: "pregnancy",
        rule_type: RuleType::Absolute,
        note: "ACE inhibitors are fetotoxic in the second and third trimester.",
    },
    ContraindicationRule {
        drug: "lisinopril",
        condition: "angioedema",
        rule_type: RuleType::Absolute,
        note: "History of ACE-inhibitor angioedema precludes rechallenge.",
    },
    ContraindicationRule {
        drug: "spironolactone",
        condition: "hyperkalemia",
        rule_type: RuleType::Absolute,
        note: "Potassium-sparing diuresis worsens hyperkalemia.",
    },
    ContraindicationRule {
        drug: "ciprofloxacin",
        condition: "myasthenia gravis",
        rule_type: RuleType::Relative,
        note: "Fluoroquinolones may exacerbate muscle weakness.",
    },
    ContraindicationRule {
        drug: "prednisone",
        condition: "systemic fungal infection",
        rule_type: RuleType::Absolute,
        note: "Immunosuppression is contraindicated in untreated systemic mycosis.",
    },
];

pub const DOSAGE_GUIDELINES: &[DosageGuideline] = &[
    DosageGuideline {
        drug: "sildenafil",
        max_daily_dose: "100 mg per day",
        geriatric_adjustment: Some("Start at 25 mg in patients over 65."),
    },
    DosageGuideline {
        drug: "metformin",
        max_daily_dose: "2000 mg per day in divided doses",
        geriatric_adjustment: Some("Reassess renal function before dose increases over 65."),
    },
    DosageGuideline {
        drug: "lisinopril",
        max_daily_dose: "40 mg per day",
        geriatric_adjustment: None,
    },
    DosageGuideline {
        drug: "ibuprofen",
        max_daily_dose: "3200 mg per day",
        geriatric_adjustment: Some("Prefer 1200 mg ceiling and short courses in the elderly."),
    },
    DosageGuideline {
        drug: "acetaminophen",
        max_daily_dose: "3000 mg per day",
        geriatric_adjustment: Some("Cap at 2000 mg in frail elderly or hepatic impairment."),
    },
    DosageGuideline {
        drug: "warfarin",
        max_daily_dose: "10 mg per day typical ceiling",
        geriatric_adjustment: Some("Initiate at 5 mg or less over 65; INR-guided."),
    },
    DosageGuideline {
        drug: "metoprolol",
        max_daily_dose: "400 mg per day",
        geriatric_adjustment: None,
    },
    DosageGuideline {
        drug: "simvastatin",
        max_daily_dose: "40 mg per day",
        geriatric_adjustment: None,
    },
    DosageGuideline {
        drug: "sertraline",
        max_daily_dose: "200 mg per day",
        geriatric_adjustment: Some("Start at 25 mg in the elderly."),
    },
    DosageGuideline {
        drug: "tramadol",
        max_daily_dose: "400 mg per day",
        geriatric_adjustment: Some("Cap at 300 mg per day over 75."),
    },
    DosageGuideline {
        drug: "amoxicillin",
        max_daily_dose: "3000 mg per day",
        geriatric_adjustment: None,
    },
    DosageGuideline {
        drug: "atorvastatin",
        max_daily_dose: "80 mg per day",
        geriatric_adjustment: None,
    },
];

pub const CROSS_REACTIVITY: &[CrossReactivityGroup] = &[
    CrossReactivityGroup {
        allergen: "penicillin",
        cross_reactive: &["amoxicillin", "ampicillin", "piperacillin", "cephalexin", "cefazolin"],
        rate: "~2%",
        recommendation: "Avoid aminopenicillins; use cephalosporins only with a mild index reaction.",
    },
    CrossReactivityGroup {
        allergen: "sulfonamide",
        cross_reactive: &["sulfamethoxazole", "sulfasalazine", "sulfadiazine"],
        rate: "~3%",
        recommendation: "Avoid antibiotic sulfonamides; non-antibiotic sulfonamides rarely cross-react.",
    },
    CrossReactivityGroup {
        allergen: "aspirin",
        cross_reactive: &["ibuprofen", "naproxen", "ketorolac", "diclofenac"],
        rate: "~20%",
        recommendation: "COX-1 inhibitors share the hypersensitivity mechanism; consider acetaminophen.",
    },
    CrossReactivityGroup {
        allergen: "codeine",
        cross_reactive: &["morphine", "hydrocodone", "oxycodone", "tramadol"],
        rate: "~10%",
        recommendation: "Phenanthrene opioids cross-react; consider a synthetic opioid class switch.",
    },
];
