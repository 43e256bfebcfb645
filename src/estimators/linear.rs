//! Fixed-coefficient linear models
//!
//! Both estimators here are closed-form and independent of the historical
//! store, so they always vote. They anchor the ensemble when the store is
//! empty and serve as the terminal stages of the fallback chain.

use crate::case::CaseStore;
use crate::request::PredictionRequest;
use crate::traits::Estimator;

const DAY_COEF: f64 = 50.0505;
const MILE_COEF: f64 = 0.4456;
const RECEIPT_COEF: f64 = 0.3829;
const INTERCEPT: f64 = 266.7077;

/// The fixed linear-regression formula shared by both linear estimators and
/// the fallback chain
pub fn basic_linear(days: u32, miles: f64, receipts: f64) -> f64 {
    DAY_COEF * days as f64 + MILE_COEF * miles + RECEIPT_COEF * receipts + INTERCEPT
}

/// Plain linear regression with fixed coefficients; the ultimate numeric
/// fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLinear;

impl Estimator for BasicLinear {
    fn name(&self) -> &'static str {
        "basic-linear"
    }

    fn weight(&self) -> f64 {
        0.5
    }

    fn estimate(&self, _store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        Some(basic_linear(request.days, request.miles, request.receipts))
    }
}

/// Linear regression plus pattern adjustments discovered in the historical
/// data.
///
/// Each adjustment family tests the original inputs, never the running
/// total, and all applicable adjustments accumulate; within a family exactly
/// one branch fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhancedLinear;

impl EnhancedLinear {
    fn adjusted(days: u32, miles: f64, receipts: f64) -> f64 {
        let mut value = basic_linear(days, miles, receipts);

        // High receipts: short trips are penalized harder than long ones.
        if receipts > 1500.0 {
            if days <= 3 {
                value -= (receipts - 1500.0) * 0.3;
            } else {
                value -= (receipts - 1500.0) * 0.1;
            }
        }

        // Sweet-spot bonus for 4-6 day trips.
        if (4..=6).contains(&days) {
            value += days as f64 * 15.0;
        }

        // Very long trips.
        if days >= 10 {
            value += (days - 9) as f64 * 20.0;
        }

        // High mileage: tolerated on long trips, unusual on short ones.
        if miles > 1000.0 {
            if days >= 7 {
                value += (miles - 1000.0) * 0.1;
            } else {
                value -= (miles - 1000.0) * 0.05;
            }
        }

        value
    }
}

impl Estimator for EnhancedLinear {
    fn name(&self) -> &'static str {
        "enhanced-linear"
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn estimate(&self, _store: &CaseStore, request: &PredictionRequest) -> Option<f64> {
        Some(Self::adjusted(request.days, request.miles, request.receipts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn enhanced(days: u32, miles: f64, receipts: f64) -> f64 {
        EnhancedLinear::adjusted(days, miles, receipts)
    }

    #[test]
    fn basic_formula_matches_coefficients() {
        assert_abs_diff_eq!(basic_linear(0, 0.0, 0.0), INTERCEPT, epsilon = 1e-12);
        assert_abs_diff_eq!(basic_linear(5, 300.0, 200.0), 727.2202, epsilon = 1e-9);
    }

    #[test]
    fn sweet_spot_bonus_applies_for_mid_length_trips() {
        assert_abs_diff_eq!(
            enhanced(5, 300.0, 200.0),
            basic_linear(5, 300.0, 200.0) + 5.0 * 15.0,
            epsilon = 1e-9
        );
        // Outside the window, no bonus.
        assert_abs_diff_eq!(
            enhanced(3, 300.0, 200.0),
            basic_linear(3, 300.0, 200.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn receipt_penalty_depends_on_trip_length() {
        let base_short = basic_linear(2, 100.0, 2000.0);
        assert_abs_diff_eq!(
            enhanced(2, 100.0, 2000.0),
            base_short - 500.0 * 0.3,
            epsilon = 1e-9
        );
        let base_long = basic_linear(8, 100.0, 2000.0);
        assert_abs_diff_eq!(
            enhanced(8, 100.0, 2000.0),
            base_long - 500.0 * 0.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn long_trip_and_mileage_adjustments_accumulate() {
        // days=12 triggers the long-trip bonus, miles=1200 the long-trip
        // mileage bonus; both apply to the same prediction.
        let base = basic_linear(12, 1200.0, 100.0);
        assert_abs_diff_eq!(
            enhanced(12, 1200.0, 100.0),
            base + 3.0 * 20.0 + 200.0 * 0.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn high_mileage_penalized_on_short_trips() {
        let base = basic_linear(2, 1500.0, 100.0);
        assert_abs_diff_eq!(
            enhanced(2, 1500.0, 100.0),
            base - 500.0 * 0.05,
            epsilon = 1e-9
        );
    }
}
