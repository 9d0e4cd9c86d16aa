//! Error types for transaction normalization.

use thiserror::Error;

/// Errors that can occur while normalizing a transaction row.
///
/// The transform performs no local recovery: any failure aborts the
/// current row and surfaces to the caller, which decides whether to skip
/// the row or abort the batch.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A price token in the order stream was not numeric.
    #[error("invalid price token '{token}': {source}")]
    InvalidPrice {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The timestamp deviated from the "YYYY-MM-DD HH:MM:SS" format.
    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The timestamp is well-formed but does not exist in the local time
    /// zone (falls into a DST transition gap).
    #[error("timestamp '{value}' does not map to a local time")]
    NonexistentTimestamp { value: String },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = TransformError::InvalidPrice {
            token: "abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid price token 'abc'"));
    }
}
