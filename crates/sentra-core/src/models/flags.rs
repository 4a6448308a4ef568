use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCategory {
    Interaction,
    Allergy,
    Polypharmacy,
    Age,
    Renal,
    Hepatic,
    Acuity,
    RedFlag,
    Lifestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Info,
    Warning,
    Critical,
}

/// A finding surfaced during risk assessment. Flags are purely additive;
/// producers append and nothing deduplicates across sub-models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalFlag {
    pub category: FlagCategory,
    pub severity: FlagSeverity,
    pub message: String,
}

impl ClinicalFlag {
    pub fn info(category: FlagCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: FlagSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(category: FlagCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: FlagSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(category: FlagCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: FlagSeverity::Critical,
            message: message.into(),
        }
    }
}
