//! Hybrid multi-strategy travel reimbursement estimation
//!
//! Estimates a reimbursement amount from three inputs (trip duration in
//! days, miles traveled, total receipt amount) by blending six independent
//! strategies trained on a fixed historical dataset.
//!
//! # Strategies
//!
//! | Estimator | Weight | Needs history | Approach |
//! |-----------|--------|---------------|----------|
//! | ExactMatch | 10.0 | yes | equality lookup with a one-unit tolerance |
//! | SimilarCaseAverage | 5.0 | yes | unweighted mean of near neighbors |
//! | DurationPatternKnn | 3.0 | yes | inverse-distance KNN within a day group |
//! | ReceiptBucketAverage | 2.0 | yes | localized mean within a receipt range |
//! | EnhancedLinear | 1.0 | no | fixed regression plus pattern adjustments |
//! | BasicLinear | 0.5 | no | fixed regression |
//!
//! The weighted blend is clamped to `[50.0, 3000.0]` and rounded to two
//! decimals. A missing dataset is a normal condition: the history-dependent
//! estimators abstain and the linear pair carries the prediction.
//!
//! # Example
//!
//! ```rust
//! use reimburse_ensemble::{CaseStore, EnsembleCombiner, PredictionRequest};
//!
//! let store = CaseStore::load_path("public_cases.json");
//! let combiner = EnsembleCombiner::new();
//! let request = PredictionRequest::new(5, 300.0, 200.0);
//!
//! let amount = combiner.predict(&store, &request);
//! assert!((50.0..=3000.0).contains(&amount));
//! ```
//!
//! For raw text inputs (e.g. straight off a command line) use the fallback
//! chain instead, which always resolves to a number:
//!
//! ```rust
//! use reimburse_ensemble::{fallback, CaseStore};
//!
//! let store = CaseStore::empty();
//! let amount = fallback::calculate_reimbursement(&store, "5", "300", "200");
//! assert_eq!(amount, 777.22);
//! ```

pub mod case;
pub mod ensemble;
pub mod error;
pub mod estimators;
pub mod fallback;
pub mod request;
pub mod traits;

pub use case::{CaseStore, DurationIndex, ReceiptBucketIndex, TrainingCase, RECEIPT_BUCKETS};
pub use ensemble::{EnsembleCombiner, EstimatorVote, OUTPUT_MAX, OUTPUT_MIN};
pub use error::{Error, Result};
pub use estimators::{
    basic_linear, BasicLinear, DurationPatternKnn, EnhancedLinear, ExactMatch,
    ReceiptBucketAverage, SimilarCaseAverage,
};
pub use request::PredictionRequest;
pub use traits::Estimator;
