//! pixmaze-io - Image I/O for pixmaze
//!
//! Supported formats:
//!
//! - **PNG** (feature `png-format`, on by default) via the `png` crate
//! - **PNM** (feature `pnm`, on by default): binary PBM, PGM and PPM
//!
//! Input format is detected from the file header; output format is chosen
//! by the caller, usually from the file extension with
//! [`ImageFormat::from_extension`].
//!
//! # Examples
//!
//! ```
//! use pixmaze_core::{Pix, PixelDepth};
//! use pixmaze_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let pix = Pix::new(16, 16, PixelDepth::Bit8).unwrap();
//! let bytes = write_image_mem(&pix, ImageFormat::Pnm).unwrap();
//! let back = read_image_mem(&bytes).unwrap();
//! assert_eq!(back.width(), 16);
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use pixmaze_core::ImageFormat;

use pixmaze_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Fails when the file cannot be opened, its format is unknown or not
/// enabled, or the data does not decode.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    let pix = read_image_format(reader, format)?;
    log::debug!(
        "read {} ({:?}, {}x{}, {} bpp)",
        path.display(),
        format,
        pix.width(),
        pix.height(),
        pix.depth().bits()
    );
    Ok(pix)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            other
        ))),
    }
}

/// Write an image to a file path.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {} ({:?})", path.display(), format);
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_image_format(pix, &mut buf, format)?;
    Ok(buf)
}

fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not enabled",
            other
        ))),
    }
}
