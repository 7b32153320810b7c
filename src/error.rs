//! Error types for nearspot operations.

use thiserror::Error;

/// Errors that can occur while loading data or configuring the detector.
///
/// The core index and search are total over validated input and never fail;
/// errors surface only at the I/O and configuration boundaries.
#[derive(Error, Debug)]
pub enum NearspotError {
    /// Underlying I/O failure while reading or writing CSV files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input (bad record shape, unparseable field).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input rejected at the loading boundary (e.g. non-finite coordinates).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, NearspotError>;
