//! The heuristic rule scorer: deterministic contributions from
//! demographics, medication burden, comorbidities, vitals, labs, and
//! lifestyle, each independently computed and summed.

use sentra_core::models::{
    ActivityLevel, AlcoholUse, ClinicalFlag, FlagCategory, Patient, SmokingStatus,
};

/// The rule scorer is always available and reports this fixed confidence.
pub const HEURISTIC_CONFIDENCE: f64 = 80.0;

#[derive(Debug, Clone)]
pub struct HeuristicScore {
    /// 0–100.
    pub score: f64,
    pub flags: Vec<ClinicalFlag>,
}

/// Score a patient against the heuristic rules. Missing sections (vitals,
/// labs, lifestyle) simply contribute nothing.
pub fn score(patient: &Patient) -> HeuristicScore {
    let mut score = 0.0;
    let mut flags = Vec::new();

    score += age_points(patient.age, &mut flags);
    score += medication_points(patient.medications.len(), &mut flags);
    score += history_points(patient, &mut flags);
    if let Some(vitals) = &patient.vitals {
        score += vitals_points(vitals, &mut flags);
    }
    if let Some(labs) = &patient.labs {
        score += lab_points(labs, &mut flags);
    }
    if let Some(lifestyle) = &patient.lifestyle {
        score += lifestyle_points(lifestyle, &mut flags);
    }

    HeuristicScore {
        score: score.min(100.0),
        flags,
    }
}

fn age_points(age: u32, flags: &mut Vec<ClinicalFlag>) -> f64 {
    if age >= 80 {
        flags.push(ClinicalFlag::warning(
            FlagCategory::Age,
            format!("Age {age}: very high baseline risk"),
        ));
        25.0
    } else if age >= 65 {
        flags.push(ClinicalFlag::info(
            FlagCategory::Age,
            format!("Age {age}: elevated baseline risk"),
        ));
        15.0
    } else if age >= 50 {
        5.0
    } else {
        0.0
    }
}

fn medication_points(count: usize, flags: &mut Vec<ClinicalFlag>) -> f64 {
    if count >= 10 {
        flags.push(ClinicalFlag::critical(
            FlagCategory::Polypharmacy,
            format!("Severe polypharmacy: {count} concurrent medications"),
        ));
        25.0
    } else if count >= 5 {
        flags.push(ClinicalFlag::warning(
            FlagCategory::Polypharmacy,
            format!("Polypharmacy: {count} concurrent medications"),
        ));
        15.0
    } else if count >= 3 {
        5.0
    } else {
        0.0
    }
}

fn history_points(patient: &Patient, flags: &mut Vec<ClinicalFlag>) -> f64 {
    let mut points = 0.0;

    let conditions = patient.conditions.len();
    if conditions >= 5 {
        points += 15.0;
    } else if conditions >= 3 {
        points += 8.0;
    }

    if patient.allergies.len() >= 3 {
        points += 10.0;
        flags.push(ClinicalFlag::warning(
            FlagCategory::Allergy,
            format!("{} documented allergies", patient.allergies.len()),
        ));
    }

    points
}

fn vitals_points(
    vitals: &sentra_core::models::VitalSigns,
    flags: &mut Vec<ClinicalFlag>,
) -> f64 {
    let mut points = 0.0;

    let systolic = vitals.systolic_bp.unwrap_or(0.0);
    let diastolic = vitals.diastolic_bp.unwrap_or(0.0);
    if systolic >= 180.0 || diastolic >= 120.0 {
        points += 15.0;
        flags.push(ClinicalFlag::critical(
            FlagCategory::Acuity,
            format!("Hypertensive crisis range: {systolic:.0}/{diastolic:.0}"),
        ));
    } else if systolic >= 140.0 || diastolic >= 90.0 {
        points += 8.0;
    }

    if let Some(bmi) = vitals.bmi {
        if bmi >= 40.0 {
            points += 10.0;
            flags.push(ClinicalFlag::warning(
                FlagCategory::Lifestyle,
                format!("BMI {bmi:.1}: class III obesity"),
            ));
        } else if bmi >= 30.0 {
            points += 5.0;
        }
    }

    points
}

fn lab_points(labs: &sentra_core::models::LabPanel, flags: &mut Vec<ClinicalFlag>) -> f64 {
    let mut points = 0.0;

    if let Some(creatinine) = labs.creatinine {
        if creatinine > 2.0 {
            points += 15.0;
            flags.push(ClinicalFlag::critical(
                FlagCategory::Renal,
                format!("Creatinine {creatinine:.1} mg/dL: significant renal impairment"),
            ));
        } else if creatinine > 1.5 {
            points += 8.0;
            flags.push(ClinicalFlag::warning(
                FlagCategory::Renal,
                format!("Creatinine {creatinine:.1} mg/dL: reduced renal function"),
            ));
        }
    }

    if let Some(gfr) = labs.gfr {
        if gfr < 30.0 {
            points += 15.0;
            flags.push(ClinicalFlag::critical(
                FlagCategory::Renal,
                format!("GFR {gfr:.0}: severe renal impairment"),
            ));
        } else if gfr < 60.0 {
            points += 8.0;
            flags.push(ClinicalFlag::warning(
                FlagCategory::Renal,
                format!("GFR {gfr:.0}: moderate renal impairment"),
            ));
        }
    }

    let transaminase = labs.ast.unwrap_or(0.0).max(labs.alt.unwrap_or(0.0));
    if transaminase > 120.0 {
        points += 15.0;
        flags.push(ClinicalFlag::critical(
            FlagCategory::Hepatic,
            format!("Transaminases {transaminase:.0} U/L: marked elevation"),
        ));
    } else if transaminase > 60.0 {
        points += 5.0;
        flags.push(ClinicalFlag::warning(
            FlagCategory::Hepatic,
            format!("Transaminases {transaminase:.0} U/L: mild elevation"),
        ));
    }

    if let Some(hba1c) = labs.hba1c
        && hba1c > 9.0
    {
        points += 8.0;
        flags.push(ClinicalFlag::warning(
            FlagCategory::Lifestyle,
            format!("HbA1c {hba1c:.1}%: poor glycemic control"),
        ));
    }

    if let Some(inr) = labs.inr
        && inr > 3.5
    {
        points += 12.0;
        flags.push(ClinicalFlag::critical(
            FlagCategory::Interaction,
            format!("INR {inr:.1}: supratherapeutic anticoagulation"),
        ));
    }

    points
}

fn lifestyle_points(
    lifestyle: &sentra_core::models::Lifestyle,
    flags: &mut Vec<ClinicalFlag>,
) -> f64 {
    let mut points = 0.0;

    if lifestyle.smoking == SmokingStatus::Current {
        points += 5.0;
        flags.push(ClinicalFlag::info(FlagCategory::Lifestyle, "Current smoker"));
    }
    if lifestyle.alcohol == AlcoholUse::Heavy {
        points += 8.0;
        flags.push(ClinicalFlag::info(FlagCategory::Lifestyle, "Heavy alcohol use"));
    }
    if lifestyle.activity == ActivityLevel::Sedentary {
        points += 3.0;
    }

    points
}
