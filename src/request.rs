//! Prediction requests and input coercion

use crate::error::{Error, Result};

/// One coerced (days, miles, receipts) prediction input
///
/// Coercion happens before any estimator runs: day counts are truncated
/// toward zero, negatives clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    pub days: u32,
    pub miles: f64,
    pub receipts: f64,
}

impl PredictionRequest {
    /// Build a request from already-numeric inputs, clamping out-of-range
    /// values rather than rejecting them
    pub fn new(days: i64, miles: f64, receipts: f64) -> Self {
        Self {
            days: days.max(0) as u32,
            miles: miles.max(0.0),
            receipts: receipts.max(0.0),
        }
    }

    /// Coerce the three raw text inputs into a request.
    ///
    /// Fails only when a value is not numeric (or not finite); negative and
    /// fractional values are absorbed by clamping/truncation.
    pub fn from_raw(days: &str, miles: &str, receipts: &str) -> Result<Self> {
        let days = coerce_nonneg("days", days)?.trunc() as u32;
        let miles = coerce_nonneg("miles", miles)?;
        let receipts = coerce_nonneg("receipts", receipts)?;
        Ok(Self {
            days,
            miles,
            receipts,
        })
    }
}

fn coerce_nonneg(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::non_numeric(field, raw))?;
    if !value.is_finite() {
        return Err(Error::non_numeric(field, raw));
    }
    Ok(value.max(0.0))
}
