//! The `FactStore` trait and the in-memory reference implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::entries::{
    names_match, ContraindicationRule, CrossReactivityGroup, DosageGuideline, DrugInteraction,
    ExtendedInteraction,
};
use crate::error::FactStoreError;
use crate::seed;

/// Queryable medical fact base. Implementations must treat all lookups as
/// case-insensitive substring matches and be safe to call concurrently.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// All curated interactions involving the named drug.
    async fn find_interactions(&self, name: &str) -> Result<Vec<DrugInteraction>, FactStoreError>;

    /// Curated interaction for an unordered drug pair, if any.
    async fn check_drug_pair(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<DrugInteraction>, FactStoreError>;

    /// Contraindication rules whose condition text contains the query.
    async fn find_contraindications(
        &self,
        query: &str,
    ) -> Result<Vec<ContraindicationRule>, FactStoreError>;

    /// Dosage guideline for a drug, matched by substring in either direction.
    async fn dosage_guideline(
        &self,
        drug: &str,
    ) -> Result<Option<DosageGuideline>, FactStoreError>;

    /// Cross-reactivity group for an allergen, if one is known.
    async fn check_cross_reactivity(
        &self,
        allergen: &str,
    ) -> Result<Option<CrossReactivityGroup>, FactStoreError>;

    /// Extended-knowledge-base lookup for an unordered drug pair.
    async fn check_pair_extended(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<ExtendedInteraction>, FactStoreError>;
}

/// Serves the bundled seed tables from memory. Stateless and cheap to
/// construct; every method completes without I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceFactStore;

impl ReferenceFactStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FactStore for ReferenceFactStore {
    async fn find_interactions(&self, name: &str) -> Result<Vec<DrugInteraction>, FactStoreError> {
        let hits: Vec<DrugInteraction> = seed::CURATED_INTERACTIONS
            .iter()
            .filter(|entry| entry.involves(name))
            .cloned()
            .collect();
        debug!(drug = %name, hits = hits.len(), "interaction lookup");
        Ok(hits)
    }

    async fn check_drug_pair(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<DrugInteraction>, FactStoreError> {
        Ok(seed::CURATED_INTERACTIONS
            .iter()
            .find(|entry| entry.matches_pair(a, b))
            .cloned())
    }

    async fn find_contraindications(
        &self,
        query: &str,
    ) -> Result<Vec<ContraindicationRule>, FactStoreError> {
        let query = query.to_lowercase();
        Ok(seed::CONTRAINDICATIONS
            .iter()
            .filter(|rule| !query.is_empty() && rule.condition.contains(&query))
            .cloned()
            .collect())
    }

    async fn dosage_guideline(
        &self,
        drug: &str,
    ) -> Result<Option<DosageGuideline>, FactStoreError> {
        Ok(seed::DOSAGE_GUIDELINES
            .iter()
            .find(|guideline| names_match(guideline.drug, drug))
            .cloned())
    }

    async fn check_cross_reactivity(
        &self,
        allergen: &str,
    ) -> Result<Option<CrossReactivityGroup>, FactStoreError> {
        Ok(seed::CROSS_REACTIVITY
            .iter()
            .find(|group| names_match(group.allergen, allergen))
            .cloned())
    }

    async fn check_pair_extended(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<ExtendedInteraction>, FactStoreError> {
        Ok(seed::EXTENDED_INTERACTIONS
            .iter()
            .find(|entry| entry.matches_pair(a, b))
            .cloned())
    }
}
