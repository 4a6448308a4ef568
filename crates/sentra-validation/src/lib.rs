//! sentra-validation
//!
//! Cross-validation of an externally generated treatment plan: re-derives
//! the candidate drug set and audits it against the fact store for
//! interactions, contraindications, dosage ceilings, and allergy conflicts
//! the plan's author may have missed.

pub mod engine;

pub use engine::cross_validate;
