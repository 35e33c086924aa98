//! Error types for the accident_data crate

use thiserror::Error;

/// Custom error types for the accident_data crate
#[derive(Debug, Error)]
pub enum DataError {
    /// Error related to record contents
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from JSON parsing
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DataError>;
