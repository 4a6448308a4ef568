//! sentra-knowledge
//!
//! The medical fact store: curated drug-interaction pairs, an extended
//! interaction knowledge base with clinical-significance scores,
//! contraindication rules, dosage guidelines, and allergy cross-reactivity
//! groups.
//!
//! Consumers depend on the [`store::FactStore`] trait; the bundled
//! [`store::ReferenceFactStore`] serves the seed tables in [`seed`] from
//! memory. All lookups are case-insensitive substring matches.

pub mod entries;
pub mod error;
pub mod seed;
pub mod store;

pub use entries::{
    ContraindicationRule, CrossReactivityGroup, DosageGuideline, DrugInteraction,
    ExtendedInteraction, RuleType,
};
pub use error::FactStoreError;
pub use store::{FactStore, ReferenceFactStore};
