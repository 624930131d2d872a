//! Error types for job file conversion
//!
//! Two failures are terminal for a conversion run: the input could not be
//! found, or something went wrong while reading, rendering or writing.
//! Malformed lines inside a readable job file are never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Error processing input file: {0}")]
    Processing(String),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Processing(err.to_string())
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Processing(err.to_string())
    }
}

/// Conversion from ConvertError to PyErr
#[cfg(feature = "python")]
impl From<ConvertError> for pyo3::PyErr {
    fn from(err: ConvertError) -> Self {
        use pyo3::exceptions::{PyFileNotFoundError, PyRuntimeError, PyValueError};
        match err {
            ConvertError::InputNotFound(_) => PyFileNotFoundError::new_err(err.to_string()),
            ConvertError::InvalidOption { .. } => PyValueError::new_err(err.to_string()),
            ConvertError::Processing(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
