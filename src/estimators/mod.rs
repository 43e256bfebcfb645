//! The six estimation strategies
//!
//! Four of them consult historical data and abstain when nothing relevant
//! exists; the two linear models always produce a value and anchor the
//! ensemble when the store is empty.

mod bucket;
mod duration;
mod exact;
mod linear;
mod similar;

pub use bucket::ReceiptBucketAverage;
pub use duration::DurationPatternKnn;
pub use exact::ExactMatch;
pub use linear::{basic_linear, BasicLinear, EnhancedLinear};
pub use similar::SimilarCaseAverage;
