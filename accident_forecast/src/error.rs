//! Error types for the accident_forecast crate

use thiserror::Error;

/// Custom error types for the accident_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A region was presented at inference that the encoder never saw at fit
    /// time. Fatal: the model's embedding table has no row for it.
    #[error("Unknown region: '{0}' was not seen when the encoder was fitted")]
    UnknownRegion(String),

    /// A region has no observed days at all, so no series can be built
    #[error("Empty series: region '{0}' has no observed days")]
    EmptySeries(String),

    /// A temporal split left one side empty, so training or evaluation
    /// cannot proceed
    #[error("Empty {side} partition at cutoff {cutoff}")]
    EmptyPartition {
        /// "train" or "test"
        side: &'static str,
        /// The cutoff date that produced the empty side
        cutoff: chrono::NaiveDate,
    },

    /// A window did not have the exact expected length
    #[error("Window length mismatch: expected {expected}, got {actual}")]
    WindowLength { expected: usize, actual: usize },

    /// A region code fell outside the encoder's fitted range
    #[error("Region code {code} out of range: encoder has {num_regions} regions")]
    RegionCodeOutOfRange { code: u32, num_regions: u32 },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from encoder artifact serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
