//! The estimator capability

use crate::case::CaseStore;
use crate::request::PredictionRequest;

/// A single prediction strategy over the historical store.
///
/// The set of estimators is closed and fixed: the combiner enumerates them
/// in a fixed order with fixed weights rather than discovering them through
/// any kind of registry. An estimator that finds no usable historical data
/// abstains by returning `None`; the two linear strategies never abstain.
pub trait Estimator {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fixed confidence weight applied when this estimator votes
    fn weight(&self) -> f64;

    /// Produce an estimate, or `None` when there is no usable data
    fn estimate(&self, store: &CaseStore, request: &PredictionRequest) -> Option<f64>;
}
