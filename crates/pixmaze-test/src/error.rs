//! Error types for pixmaze-test

use thiserror::Error;

/// Errors that abort a regression test outright
///
/// Failed comparisons are not errors; they are collected by
/// [`RegParams`](crate::RegParams) and reported by `cleanup`.
#[derive(Debug, Error)]
pub enum TestError {
    /// A file under `tests/data/images` could not be read
    #[error("cannot read test image {path}: {message}")]
    ImageLoad { path: String, message: String },

    /// A file under `tests/regout` could not be written
    #[error("cannot write regression output {path}: {message}")]
    ImageWrite { path: String, message: String },

    /// Creating the output directory failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for test helpers
pub type TestResult<T> = Result<T, TestError>;
