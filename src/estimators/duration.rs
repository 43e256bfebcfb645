//! Nearest-neighbor prediction within a duration group

use ordered_float::OrderedFloat;

use crate::case::CaseStore;
use crate::request::PredictionRequest;
use crate::traits::Estimator;

/// Number of nearest neighbors blended
const K: usize = 5;

/// Keeps the inverse-distance weight finite for zero-distance matches
const SCORE_SMOOTHING: f64 = 0.01;

/// Inverse-distance weighted KNN over cases sharing the request's exact
/// day-count.
///
/// Candidates are scored by `|Δmiles|/100 + |Δreceipts|/100` (normalized L1
/// over the two continuous features, lower is better) and the five
/// lowest-scoring outputs are blended with weights `1 / (score + 0.01)`.
/// Abstains only when no case shares the day-count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationPatternKnn;

impl Estimator for DurationPatternKnn {
    fn name(&self) -> &'static str {
        "duration-pattern-knn"
    }

    fn weight(&self) -> f64 {
        3.0
    }

    fn estimate(&self, store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        let group = store.duration_index().group(request.days)?;

        let mut candidates: Vec<(OrderedFloat<f64>, usize)> = group
            .iter()
            .map(|&idx| {
                let case = &store.cases()[idx];
                let score = (case.miles - request.miles).abs() / 100.0
                    + (case.receipts - request.receipts).abs() / 100.0;
                (OrderedFloat(score), idx)
            })
            .collect();
        candidates.sort_by_key(|&(score, _)| score);

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for &(score, idx) in candidates.iter().take(K) {
            let weight = 1.0 / (score.into_inner() + SCORE_SMOOTHING);
            weighted_sum += weight * store.cases()[idx].output;
            total_weight += weight;
        }
        // The group is non-empty by construction and every weight is
        // positive, so the division is safe.
        Some(weighted_sum / total_weight)
    }
}
