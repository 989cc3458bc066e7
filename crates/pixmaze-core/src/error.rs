//! Error types for pixmaze-core

use thiserror::Error;

/// Errors raised while creating or accessing a [`Pix`](crate::Pix)
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized image, or one whose pixel count overflows `usize`
    #[error("cannot create a {width}x{height} image")]
    InvalidDimension { width: u32, height: u32 },

    /// Bit depth other than 1, 8 or 32
    #[error("{0} bpp is not a valid depth (expected 1, 8 or 32)")]
    InvalidDepth(u32),

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) lies outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Operation not defined for this depth
    #[error("operation not defined for {0} bpp images")]
    UnsupportedDepth(u32),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
