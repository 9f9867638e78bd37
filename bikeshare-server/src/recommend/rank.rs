//! Ranking and truncation of recommendations.

use super::Recommendation;

/// Sort recommendations by closeness of their ETA to `midpoint`.
///
/// The sort is stable, so equally close recommendations keep their input
/// order.
pub fn rank_by_midpoint(mut recommendations: Vec<Recommendation>, midpoint: f64) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| {
        a.offset_from(midpoint)
            .total_cmp(&b.offset_from(midpoint))
    });

    recommendations
}

/// Keep at most `limit` recommendations, after ranking.
///
/// A limit beyond the length returns everything unchanged.
pub fn truncate(mut recommendations: Vec<Recommendation>, limit: Option<usize>) -> Vec<Recommendation> {
    if let Some(limit) = limit {
        recommendations.truncate(limit);
    }
    recommendations
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn recs_strategy() -> impl Strategy<Value = Vec<Recommendation>> {
        prop::collection::vec(0.0f64..120.0, 0..30).prop_map(|etas| {
            etas.into_iter()
                .enumerate()
                .map(|(i, eta)| Recommendation {
                    destination: format!("station-{i}"),
                    eta,
                    distance: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn ranked_is_sorted_by_offset(recs in recs_strategy(), midpoint in 0.0f64..120.0) {
            let ranked = rank_by_midpoint(recs, midpoint);
            for window in ranked.windows(2) {
                prop_assert!(window[0].offset_from(midpoint) <= window[1].offset_from(midpoint));
            }
        }

        #[test]
        fn ranking_preserves_elements(recs in recs_strategy(), midpoint in 0.0f64..120.0) {
            let mut before: Vec<String> = recs.iter().map(|r| r.destination.clone()).collect();
            let mut after: Vec<String> = rank_by_midpoint(recs, midpoint)
                .into_iter()
                .map(|r| r.destination)
                .collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn truncate_is_clamped(recs in recs_strategy(), limit in 0usize..40) {
            let len = recs.len();
            let kept = truncate(recs.clone(), Some(limit));
            prop_assert_eq!(kept.len(), limit.min(len));
            prop_assert_eq!(&kept[..], &recs[..kept.len()]);
        }
    }
}
