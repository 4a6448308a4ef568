use sentra_core::models::IssueSeverity;
use sentra_knowledge::{FactStore, ReferenceFactStore, RuleType};

#[tokio::test]
async fn nitrate_pde5_pair_matches_in_both_orders() {
    let store = ReferenceFactStore::new();

    let forward = store
        .check_drug_pair("nitroglycerin", "sildenafil")
        .await
        .unwrap();
    let reverse = store
        .check_drug_pair("sildenafil", "nitroglycerin")
        .await
        .unwrap();

    let forward = forward.expect("pair should be seeded");
    let reverse = reverse.expect("pair should be seeded");
    assert_eq!(forward.severity, IssueSeverity::Critical);
    assert_eq!(reverse.severity, IssueSeverity::Critical);
}

#[tokio::test]
async fn pair_lookup_is_case_insensitive_substring() {
    let store = ReferenceFactStore::new();
    let hit = store
        .check_drug_pair("Warfarin Sodium", "ASPIRIN")
        .await
        .unwrap();
    assert!(hit.is_some(), "substring match should find warfarin + aspirin");
}

#[tokio::test]
async fn unknown_pair_returns_none() {
    let store = ReferenceFactStore::new();
    let hit = store
        .check_drug_pair("acetaminophen", "loratadine")
        .await
        .unwrap();
    assert!(hit.is_none());
}

#[tokio::test]
async fn find_interactions_collects_all_pairs_for_drug() {
    let store = ReferenceFactStore::new();
    let hits = store.find_interactions("warfarin").await.unwrap();
    assert!(hits.len() >= 3, "warfarin has several seeded pairs");
    assert!(hits.iter().all(|entry| entry.involves("warfarin")));
}

#[tokio::test]
async fn contraindication_lookup_matches_condition_substring() {
    let store = ReferenceFactStore::new();
    let rules = store.find_contraindications("asthma").await.unwrap();
    let propranolol = rules
        .iter()
        .find(|rule| rule.drug == "propranolol")
        .expect("propranolol/asthma rule is seeded");
    assert_eq!(propranolol.rule_type, RuleType::Absolute);
}

#[tokio::test]
async fn empty_contraindication_query_matches_nothing() {
    let store = ReferenceFactStore::new();
    let rules = store.find_contraindications("").await.unwrap();
    assert!(rules.is_empty());
}

#[tokio::test]
async fn dosage_guideline_matches_either_direction() {
    let store = ReferenceFactStore::new();
    let by_exact = store.dosage_guideline("sildenafil").await.unwrap();
    let by_branded = store.dosage_guideline("sildenafil citrate").await.unwrap();
    assert!(by_exact.is_some());
    assert!(by_branded.is_some());
}

#[tokio::test]
async fn cross_reactivity_group_found_for_penicillin() {
    let store = ReferenceFactStore::new();
    let group = store
        .check_cross_reactivity("Penicillin")
        .await
        .unwrap()
        .expect("penicillin group is seeded");
    assert!(group.cross_reactive.contains(&"amoxicillin"));
    assert!(!group.recommendation.is_empty());
}

#[tokio::test]
async fn extended_lookup_scores_significance() {
    let store = ReferenceFactStore::new();
    let hit = store
        .check_pair_extended("warfarin", "amiodarone")
        .await
        .unwrap()
        .expect("amiodarone + warfarin is in the extended KB");
    assert!(hit.clinical_significance >= 7);
}
