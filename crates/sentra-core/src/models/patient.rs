use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw patient data as submitted for risk assessment or plan validation.
///
/// Every field beyond `age` is optional or may be empty; the engines
/// substitute safe defaults rather than rejecting incomplete records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub age: u32,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub vitals: Option<VitalSigns>,
    #[serde(default)]
    pub labs: Option<LabPanel>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
}

impl Patient {
    /// Lowercased drug and generic names of all current medications.
    pub fn medication_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for med in &self.medications {
            names.push(med.name.to_lowercase());
            if let Some(generic) = &med.generic_name {
                names.push(generic.to_lowercase());
            }
        }
        names
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Other,
}

/// A current medication. `generic_name` is carried separately because the
/// fact store matches on either name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    #[serde(default)]
    pub systolic_bp: Option<f64>,
    #[serde(default)]
    pub diastolic_bp: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
}

/// Most recent lab values. Units follow US convention: creatinine mg/dL,
/// GFR mL/min, AST/ALT U/L, HbA1c %, INR dimensionless.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LabPanel {
    #[serde(default)]
    pub creatinine: Option<f64>,
    #[serde(default)]
    pub gfr: Option<f64>,
    #[serde(default)]
    pub ast: Option<f64>,
    #[serde(default)]
    pub alt: Option<f64>,
    #[serde(default)]
    pub hba1c: Option<f64>,
    #[serde(default)]
    pub inr: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub smoking: SmokingStatus,
    #[serde(default)]
    pub alcohol: AlcoholUse,
    #[serde(default)]
    pub activity: ActivityLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    #[default]
    Never,
    Former,
    Current,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    #[default]
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Moderate,
    Active,
    Sedentary,
}
