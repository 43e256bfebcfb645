//! Historical case storage and the derived lookup indices
//!
//! The store is built once at startup from an external JSON dataset and is
//! read-only afterwards. A missing or unreadable dataset is a normal
//! condition: the store stays empty and the history-dependent estimators
//! simply abstain.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;

/// Fixed receipt partitions, half-open `[low, high)`, in table order.
///
/// Amounts of 3000 or more fall outside every bucket; that is a "no data"
/// outcome for the bucket estimator, not an error.
pub const RECEIPT_BUCKETS: [(f64, f64); 10] = [
    (0.0, 50.0),
    (50.0, 100.0),
    (100.0, 200.0),
    (200.0, 300.0),
    (300.0, 500.0),
    (500.0, 800.0),
    (800.0, 1200.0),
    (1200.0, 1600.0),
    (1600.0, 2000.0),
    (2000.0, 3000.0),
];

/// One historical (inputs -> observed reimbursement) record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingCase {
    /// Trip duration in whole days
    pub days: u32,
    /// Miles traveled
    pub miles: f64,
    /// Total receipt amount
    pub receipts: f64,
    /// Historically observed reimbursement
    pub output: f64,
}

/// Wire format of the external dataset
#[derive(Debug, Deserialize)]
struct RawCase {
    input: RawInput,
    expected_output: f64,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    trip_duration_days: f64,
    miles_traveled: f64,
    total_receipts_amount: f64,
}

impl From<RawCase> for TrainingCase {
    fn from(raw: RawCase) -> Self {
        Self {
            days: raw.input.trip_duration_days.max(0.0).trunc() as u32,
            miles: raw.input.miles_traveled.max(0.0),
            receipts: raw.input.total_receipts_amount.max(0.0),
            output: raw.expected_output,
        }
    }
}

/// Groups cases by exact trip-duration value
///
/// Holds indices into the store's case vector; each group preserves load
/// order so that downstream tie-breaking stays deterministic.
#[derive(Debug, Default)]
pub struct DurationIndex {
    groups: HashMap<u32, Vec<usize>>,
}

impl DurationIndex {
    fn build(cases: &[TrainingCase]) -> Self {
        let mut groups: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, case) in cases.iter().enumerate() {
            groups.entry(case.days).or_default().push(idx);
        }
        Self { groups }
    }

    /// All case indices sharing the exact day-count, in load order
    pub fn group(&self, days: u32) -> Option<&[usize]> {
        self.groups.get(&days).map(Vec::as_slice)
    }
}

/// Partitions cases into the fixed receipt ranges of [`RECEIPT_BUCKETS`]
#[derive(Debug)]
pub struct ReceiptBucketIndex {
    buckets: Vec<Vec<usize>>,
}

impl Default for ReceiptBucketIndex {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); RECEIPT_BUCKETS.len()],
        }
    }
}

impl ReceiptBucketIndex {
    fn build(cases: &[TrainingCase]) -> Self {
        let mut index = Self::default();
        for (idx, case) in cases.iter().enumerate() {
            if let Some(bucket) = Self::bucket_of(case.receipts) {
                index.buckets[bucket].push(idx);
            }
        }
        index
    }

    /// Position of the bucket containing `receipts`, testing the table in
    /// order. The ranges are disjoint, so at most one matches.
    pub fn bucket_of(receipts: f64) -> Option<usize> {
        RECEIPT_BUCKETS
            .iter()
            .position(|&(low, high)| low <= receipts && receipts < high)
    }

    /// Case indices in the bucket containing `receipts`, in load order
    pub fn group(&self, receipts: f64) -> Option<&[usize]> {
        Self::bucket_of(receipts).map(|b| self.buckets[b].as_slice())
    }
}

/// Immutable set of training cases plus the two derived indices
///
/// Built once before any request is served; safe to share across callers
/// since nothing writes to it after construction.
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<TrainingCase>,
    by_duration: DurationIndex,
    by_bucket: ReceiptBucketIndex,
}

impl CaseStore {
    /// An empty store; every history-dependent estimator will abstain
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from already-materialized cases, preserving their order
    pub fn from_cases(cases: Vec<TrainingCase>) -> Self {
        let by_duration = DurationIndex::build(&cases);
        let by_bucket = ReceiptBucketIndex::build(&cases);
        Self {
            cases,
            by_duration,
            by_bucket,
        }
    }

    /// Load the training set from a JSON dataset at `path`.
    ///
    /// Absence or unreadability of the dataset is not an error: the store
    /// comes back empty and the system degrades to the linear estimators.
    pub fn load_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(cases) => {
                debug!(count = cases.len(), path = %path.display(), "loaded training cases");
                Self::from_cases(cases)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "training data unavailable, running with empty store");
                Self::empty()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Vec<TrainingCase>> {
        let bytes = fs::read(path)?;
        let raw: Vec<RawCase> = serde_json::from_slice(&bytes)?;
        Ok(raw.into_iter().map(TrainingCase::from).collect())
    }

    /// All cases in load order
    pub fn cases(&self) -> &[TrainingCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn duration_index(&self) -> &DurationIndex {
        &self.by_duration
    }

    pub fn bucket_index(&self) -> &ReceiptBucketIndex {
        &self.by_bucket
    }
}
