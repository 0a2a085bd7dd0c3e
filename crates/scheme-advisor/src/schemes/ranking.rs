use serde::Serialize;

use super::domain::Scheme;

/// Maximum number of scored recommendations returned to the applicant.
pub const MAX_RECOMMENDATIONS: usize = 4;

const TOP_SCORE: u8 = 100;
const SCORE_STEP: u8 = 5;

/// Ordering applied to a scheme set before presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    /// Catalog (insertion) order, no score.
    Browse,
    /// Descending id as a recency proxy, truncated, positionally scored.
    Recommendation,
}

/// A scheme paired with its synthetic match score, when one applies.
///
/// The score is purely positional (100, 95, 90, 85) rather than derived
/// from any similarity computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedScheme {
    #[serde(flatten)]
    pub scheme: Scheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

/// Order and bound a scheme set according to `mode`.
pub fn rank(schemes: Vec<&Scheme>, mode: RankingMode) -> Vec<RankedScheme> {
    match mode {
        RankingMode::Browse => schemes
            .into_iter()
            .map(|scheme| RankedScheme {
                scheme: scheme.clone(),
                match_score: None,
            })
            .collect(),
        RankingMode::Recommendation => {
            let mut ordered = schemes;
            // Ids are unique, so descending id is a total order.
            ordered.sort_by(|a, b| b.id.cmp(&a.id));
            ordered
                .into_iter()
                .take(MAX_RECOMMENDATIONS)
                .enumerate()
                .map(|(position, scheme)| RankedScheme {
                    scheme: scheme.clone(),
                    match_score: Some(TOP_SCORE - SCORE_STEP * position as u8),
                })
                .collect()
        }
    }
}
