//! Pixel access functions
//!
//! Getting and setting individual pixels. The checked forms return
//! `None` / [`Error::OutOfBounds`] for coordinates outside the image; the
//! `_unchecked` forms are for loops that already iterate in range.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without the `Option` wrapper.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// The value is masked to the image depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds reporting.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val & self.inner.depth.max_value();
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel_binary() {
        let mut pm = Pix::new(8, 3, PixelDepth::Bit1).unwrap().to_mut();
        pm.set_pixel(7, 2, 1).unwrap();
        pm.set_pixel(3, 0, 5).unwrap(); // masked to 1
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(7, 2), Some(1));
        assert_eq!(pix.get_pixel(3, 0), Some(1));
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(8, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit8).unwrap().to_mut();
        let err = pm.set_pixel(4, 1, 10).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 4, y: 1, .. }));
    }

    #[test]
    fn test_rgb_access() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(1, 2, 200, 10, 30).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 2), Some((200, 10, 30)));
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_set_rgb_requires_32bpp() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit8).unwrap().to_mut();
        assert!(matches!(
            pm.set_rgb(0, 0, 1, 2, 3),
            Err(Error::UnsupportedDepth(8))
        ));
    }
}
