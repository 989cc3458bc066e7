//! Error types for pixmaze-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixmaze_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Coordinates outside the grid
    #[error("invalid coordinate ({x}, {y}) for {width}x{height} grid")]
    InvalidCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Cell id outside `[0, width * height)`
    #[error("invalid cell id {id} (grid has {len} cells)")]
    InvalidId { id: usize, len: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
