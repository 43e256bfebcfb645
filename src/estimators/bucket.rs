//! Localized averaging within a receipt bucket

use crate::case::CaseStore;
use crate::request::PredictionRequest;
use crate::traits::Estimator;

const DAY_WINDOW: u32 = 2;
const MILE_WINDOW: f64 = 100.0;

/// Averages cases in the request's receipt bucket that also sit within two
/// days and a hundred miles of the request.
///
/// Receipts of 3000 or more match no bucket; that is an abstention, not an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptBucketAverage;

impl Estimator for ReceiptBucketAverage {
    fn name(&self) -> &'static str {
        "receipt-bucket-average"
    }

    fn weight(&self) -> f64 {
        2.0
    }

    fn estimate(&self, store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        let group = store.bucket_index().group(request.receipts)?;

        let mut sum = 0.0;
        let mut count = 0usize;
        for &idx in group {
            let case = &store.cases()[idx];
            if case.days.abs_diff(request.days) <= DAY_WINDOW
                && (case.miles - request.miles).abs() <= MILE_WINDOW
            {
                sum += case.output;
                count += 1;
            }
        }
        (count > 0).then(|| sum / count as f64)
    }
}
