//! Unweighted average over near-identical cases

use crate::case::CaseStore;
use crate::request::PredictionRequest;
use crate::traits::Estimator;

/// Averages the outputs of every case within one day and a configurable
/// miles/receipts tolerance of the request.
///
/// All qualifying neighbors count equally regardless of distance.
#[derive(Debug, Clone, Copy)]
pub struct SimilarCaseAverage {
    tolerance: f64,
}

impl SimilarCaseAverage {
    /// Tolerance the ensemble uses for miles and receipts
    pub const DEFAULT_TOLERANCE: f64 = 20.0;

    pub fn new() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for SimilarCaseAverage {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for SimilarCaseAverage {
    fn name(&self) -> &'static str {
        "similar-case-average"
    }

    fn weight(&self) -> f64 {
        5.0
    }

    fn estimate(&self, store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for case in store.cases() {
            if case.days.abs_diff(request.days) <= 1
                && (case.miles - request.miles).abs() <= self.tolerance
                && (case.receipts - request.receipts).abs() <= self.tolerance
            {
                sum += case.output;
                count += 1;
            }
        }
        (count > 0).then(|| sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TrainingCase;
    use approx::assert_abs_diff_eq;

    fn case(days: u32, miles: f64, receipts: f64, output: f64) -> TrainingCase {
        TrainingCase {
            days,
            miles,
            receipts,
            output,
        }
    }

    #[test]
    fn averages_all_neighbors_equally() {
        let store = CaseStore::from_cases(vec![
            case(5, 100.0, 200.0, 600.0),
            case(6, 110.0, 190.0, 700.0),
            case(4, 90.0, 210.0, 800.0),
            // Outside the day window.
            case(7, 100.0, 200.0, 5000.0),
        ]);
        let req = PredictionRequest::new(5, 100.0, 200.0);
        let got = SimilarCaseAverage::new().estimate(&store, &req).unwrap();
        assert_abs_diff_eq!(got, 700.0, epsilon = 1e-12);
    }

    #[test]
    fn respects_custom_tolerance() {
        let store = CaseStore::from_cases(vec![case(5, 115.0, 200.0, 600.0)]);
        let req = PredictionRequest::new(5, 100.0, 200.0);
        assert!(SimilarCaseAverage::with_tolerance(10.0)
            .estimate(&store, &req)
            .is_none());
        assert_eq!(
            SimilarCaseAverage::with_tolerance(20.0).estimate(&store, &req),
            Some(600.0)
        );
    }

    #[test]
    fn abstains_without_neighbors() {
        let store = CaseStore::from_cases(vec![case(1, 10.0, 10.0, 100.0)]);
        let req = PredictionRequest::new(9, 900.0, 900.0);
        assert_eq!(SimilarCaseAverage::new().estimate(&store, &req), None);
    }
}
