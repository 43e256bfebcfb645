//! The ordered fallback chain at the request boundary
//!
//! Every stage is tried in order until one yields a number; no failure ever
//! propagates to the caller. The stages are deliberately explicit rather
//! than a broad catch-all, and each one's trigger condition is part of the
//! product contract:
//!
//! 1. coerce all three inputs and run the full ensemble,
//! 2. coerce best-effort and apply only the basic linear formula,
//! 3. emit the fixed constant.

use tracing::{debug, warn};

use crate::case::CaseStore;
use crate::ensemble::{round2, EnsembleCombiner};
use crate::error::Result;
use crate::estimators::basic_linear;
use crate::request::PredictionRequest;

/// Emitted when every coercion attempt fails
pub const LAST_RESORT: f64 = 300.0;

/// Resolve three raw text inputs to a reimbursement amount.
///
/// Always returns a well-formed number; see the module docs for the stage
/// order.
pub fn calculate_reimbursement(store: &CaseStore, days: &str, miles: &str, receipts: &str) -> f64 {
    match ensemble_stage(store, days, miles, receipts) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "ensemble stage failed, trying linear stage");
            match linear_stage(days, miles, receipts) {
                Ok(value) => value,
                Err(err) => {
                    warn!(%err, "all coercion attempts failed, emitting constant");
                    LAST_RESORT
                }
            }
        }
    }
}

/// Stage 1: full ensemble on coerced inputs, clamped and rounded
fn ensemble_stage(store: &CaseStore, days: &str, miles: &str, receipts: &str) -> Result<f64> {
    let request = PredictionRequest::from_raw(days, miles, receipts)?;
    Ok(EnsembleCombiner::new().predict(store, &request))
}

/// Stage 2: basic linear formula on best-effort coerced inputs.
///
/// Rounded but intentionally not clamped; this stage reproduces the raw
/// regression value.
fn linear_stage(days: &str, miles: &str, receipts: &str) -> Result<f64> {
    let request = PredictionRequest::from_raw(days, miles, receipts)?;
    Ok(round2(basic_linear(
        request.days,
        request.miles,
        request.receipts,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::{OUTPUT_MAX, OUTPUT_MIN};

    #[test]
    fn numeric_inputs_reach_the_ensemble() {
        let store = CaseStore::empty();
        let got = calculate_reimbursement(&store, "5", "300", "200");
        assert_eq!(got, 777.22);
    }

    #[test]
    fn non_numeric_input_resolves_to_constant() {
        let store = CaseStore::empty();
        assert_eq!(
            calculate_reimbursement(&store, "five", "300", "200"),
            LAST_RESORT
        );
        assert_eq!(calculate_reimbursement(&store, "5", "n/a", ""), LAST_RESORT);
    }

    #[test]
    fn negative_inputs_clamp_and_stay_bounded() {
        let store = CaseStore::empty();
        let got = calculate_reimbursement(&store, "-5", "-300", "-200");
        assert!((OUTPUT_MIN..=OUTPUT_MAX).contains(&got));
    }

    #[test]
    fn whitespace_is_tolerated() {
        let store = CaseStore::empty();
        let got = calculate_reimbursement(&store, " 5 ", "300 ", " 200");
        assert_eq!(got, 777.22);
    }
}
