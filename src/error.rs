//! Error types for the reimbursement estimator
//!
//! Errors only ever surface on the dataset load path and inside the
//! fallback chain; the public prediction entry points always resolve to a
//! number instead of propagating.

use thiserror::Error;

/// Error type for dataset loading and input coercion
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input supplied at the request boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The training dataset was present but malformed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a value that failed numeric coercion
    pub fn non_numeric(field: &str, raw: &str) -> Self {
        Self::InvalidInput(format!("{field} is not numeric: {raw:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("days must be numeric".to_string());
        assert_eq!(err.to_string(), "Invalid input: days must be numeric");

        let err = Error::Dataset("truncated file".to_string());
        assert_eq!(err.to_string(), "Dataset error: truncated file");

        let err = Error::non_numeric("miles", "abc");
        assert_eq!(err.to_string(), "Invalid input: miles is not numeric: \"abc\"");
    }
}
