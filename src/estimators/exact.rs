//! Exact-match lookup with a small tolerance band

use crate::case::CaseStore;
use crate::request::PredictionRequest;
use crate::traits::Estimator;

/// Tolerance absorbing rounding noise in the historical data
const UNIT_TOLERANCE: f64 = 1.0;

/// Returns the recorded output of the first case matching the request's
/// day-count exactly and its miles/receipts within one unit.
///
/// First-match semantics over load order, not best-match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Estimator for ExactMatch {
    fn name(&self) -> &'static str {
        "exact-match"
    }

    fn weight(&self) -> f64 {
        10.0
    }

    fn estimate(&self, store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        store
            .cases()
            .iter()
            .find(|case| {
                case.days == request.days
                    && (case.miles - request.miles).abs() <= UNIT_TOLERANCE
                    && (case.receipts - request.receipts).abs() <= UNIT_TOLERANCE
            })
            .map(|case| case.output)
    }
}
