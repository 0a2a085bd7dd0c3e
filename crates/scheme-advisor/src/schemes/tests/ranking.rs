use super::common::*;
use crate::schemes::catalog::SchemeCatalog;
use crate::schemes::domain::EligibilityRule;
use crate::schemes::ranking::{rank, RankingMode, MAX_RECOMMENDATIONS};

#[test]
fn browse_mode_preserves_catalog_order_without_scores() {
    let catalog = catalog();
    let ranked = rank(catalog.iter().collect(), RankingMode::Browse);

    let ids: Vec<u32> = ranked.iter().map(|entry| entry.scheme.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert!(ranked.iter().all(|entry| entry.match_score.is_none()));
}

#[test]
fn recommendation_mode_orders_by_descending_id_and_truncates() {
    let catalog = catalog();
    let ranked = rank(catalog.iter().collect(), RankingMode::Recommendation);

    assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
    let ids: Vec<u32> = ranked.iter().map(|entry| entry.scheme.id.0).collect();
    assert_eq!(ids, vec![6, 5, 4, 3]);
    let scores: Vec<u8> = ranked
        .iter()
        .filter_map(|entry| entry.match_score)
        .collect();
    assert_eq!(scores, vec![100, 95, 90, 85]);
}

#[test]
fn recommendation_scores_are_positional_for_the_reference_catalog() {
    let catalog = SchemeCatalog::new(
        [3, 9, 1, 7, 5]
            .into_iter()
            .map(|id| {
                scheme(
                    id,
                    &format!("Scheme {id}"),
                    "Open to everyone.",
                    &[],
                    EligibilityRule::default(),
                )
            })
            .collect(),
    )
    .expect("catalog builds");

    let ranked = rank(catalog.iter().collect(), RankingMode::Recommendation);

    let pairs: Vec<(u32, u8)> = ranked
        .iter()
        .map(|entry| (entry.scheme.id.0, entry.match_score.expect("scored")))
        .collect();
    assert_eq!(pairs, vec![(9, 100), (7, 95), (5, 90), (3, 85)]);
}

#[test]
fn short_sets_keep_their_positional_scores() {
    let catalog = catalog();
    let pair: Vec<_> = catalog
        .iter()
        .filter(|scheme| scheme.id.0 <= 2)
        .collect();

    let ranked = rank(pair, RankingMode::Recommendation);
    let pairs: Vec<(u32, u8)> = ranked
        .iter()
        .map(|entry| (entry.scheme.id.0, entry.match_score.expect("scored")))
        .collect();
    assert_eq!(pairs, vec![(2, 100), (1, 95)]);
}
