//! Weighted blending of the estimator votes

use tracing::debug;

use crate::case::CaseStore;
use crate::estimators::{
    basic_linear, BasicLinear, DurationPatternKnn, EnhancedLinear, ExactMatch,
    ReceiptBucketAverage, SimilarCaseAverage,
};
use crate::request::PredictionRequest;
use crate::traits::Estimator;

/// Lower clamp applied to every prediction
pub const OUTPUT_MIN: f64 = 50.0;
/// Upper clamp applied to every prediction
pub const OUTPUT_MAX: f64 = 3000.0;

/// One estimator's contribution to a prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorVote {
    pub value: f64,
    pub weight: f64,
}

/// Blends the six strategies into a single clamped, rounded number.
///
/// Stateless per request: the combiner queries each estimator in a fixed
/// order, weights those that vote, and post-processes the weighted average.
/// Pure function of (store, request).
#[derive(Debug, Default)]
pub struct EnsembleCombiner {
    exact: ExactMatch,
    similar: SimilarCaseAverage,
    duration: DurationPatternKnn,
    bucket: ReceiptBucketAverage,
    enhanced: EnhancedLinear,
    basic: BasicLinear,
}

impl EnsembleCombiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed evaluation order, highest confidence first
    fn estimators(&self) -> [&dyn Estimator; 6] {
        [
            &self.exact,
            &self.similar,
            &self.duration,
            &self.bucket,
            &self.enhanced,
            &self.basic,
        ]
    }

    /// Predict the reimbursement for `request` against `store`
    pub fn predict(&self, store: &CaseStore, request: &PredictionRequest) -> f64 {
        let mut votes = Vec::with_capacity(6);
        for estimator in self.estimators() {
            if let Some(value) = estimator.estimate(store, request) {
                debug!(
                    estimator = estimator.name(),
                    value,
                    weight = estimator.weight(),
                    "estimator vote"
                );
                votes.push(EstimatorVote {
                    value,
                    weight: estimator.weight(),
                });
            }
        }

        // The linear estimators always vote, so this branch is unreachable;
        // the contract if it ever fired is the raw basic-linear value.
        let blended = if votes.is_empty() {
            basic_linear(request.days, request.miles, request.receipts)
        } else {
            let total: f64 = votes.iter().map(|v| v.weight).sum();
            votes.iter().map(|v| v.value * v.weight).sum::<f64>() / total
        };

        round2(blended.clamp(OUTPUT_MIN, OUTPUT_MAX))
    }
}

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TrainingCase;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_store_blends_only_linear_votes() {
        let combiner = EnsembleCombiner::new();
        let store = CaseStore::empty();
        let req = PredictionRequest::new(5, 300.0, 200.0);

        // BasicLinear = 727.2202; EnhancedLinear adds the 4..=6 day bonus.
        let basic = 727.2202;
        let enhanced = basic + 75.0;
        let expected = round2((enhanced * 1.0 + basic * 0.5) / 1.5);
        assert_abs_diff_eq!(combiner.predict(&store, &req), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(combiner.predict(&store, &req), 777.22, epsilon = 1e-9);
    }

    #[test]
    fn exact_match_dominates_the_blend() {
        let combiner = EnsembleCombiner::new();
        let store = CaseStore::from_cases(vec![TrainingCase {
            days: 3,
            miles: 100.0,
            receipts: 50.0,
            output: 400.0,
        }]);
        let req = PredictionRequest::new(3, 100.4, 50.3);

        let got = combiner.predict(&store, &req);
        // Every history estimator votes 400 (weights 10+5+3+2); only the two
        // linear votes pull away from it.
        let linear = basic_linear(3, 100.4, 50.3);
        let expected = round2((400.0 * 20.0 + linear * 1.5) / 21.5);
        assert_abs_diff_eq!(got, expected, epsilon = 1e-9);
        assert!((got - 400.0).abs() < 10.0);
        assert_ne!(got, 400.0);
    }

    #[test]
    fn output_is_clamped_low() {
        let combiner = EnsembleCombiner::new();
        let store = CaseStore::from_cases(vec![TrainingCase {
            days: 0,
            miles: 0.0,
            receipts: 0.0,
            output: 1.0,
        }]);
        let req = PredictionRequest::new(0, 0.0, 0.0);
        // History votes drag the blend toward 1.0, below the floor.
        assert!(combiner.predict(&store, &req) >= OUTPUT_MIN);
    }

    #[test]
    fn output_is_clamped_high() {
        let combiner = EnsembleCombiner::new();
        let store = CaseStore::empty();
        let req = PredictionRequest::new(40, 100_000.0, 2999.0);
        assert_eq!(combiner.predict(&store, &req), OUTPUT_MAX);
    }

    #[test]
    fn prediction_is_idempotent() {
        let combiner = EnsembleCombiner::new();
        let store = CaseStore::from_cases(vec![TrainingCase {
            days: 5,
            miles: 310.0,
            receipts: 215.0,
            output: 812.0,
        }]);
        let req = PredictionRequest::new(5, 300.0, 200.0);
        assert_eq!(
            combiner.predict(&store, &req).to_bits(),
            combiner.predict(&store, &req).to_bits()
        );
    }

    #[test]
    fn round2_keeps_two_decimal_places() {
        assert_eq!(round2(777.2202), 777.22);
        assert_eq!(round2(405.646), 405.65);
        assert_eq!(round2(50.0), 50.0);
    }
}
