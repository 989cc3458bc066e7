//! Error types for pixmaze-io

use thiserror::Error;

/// Failure while reading or writing an image
///
/// PNG and PNM codec errors are flattened to strings so callers match on
/// one enum regardless of which formats are enabled.
#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing the underlying file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unrecognized header, or a format whose feature is disabled
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Header or sample data violates the format
    #[error("malformed image data: {0}")]
    InvalidData(String),

    /// The PNG decoder rejected the stream
    #[error("cannot decode image: {0}")]
    DecodeError(String),

    /// The PNG encoder failed
    #[error("cannot encode image: {0}")]
    EncodeError(String),

    /// The decoded header describes an image `Pix` cannot hold
    #[error(transparent)]
    Core(#[from] pixmaze_core::Error),
}

/// Result type for image I/O
pub type IoResult<T> = Result<T, IoError>;
