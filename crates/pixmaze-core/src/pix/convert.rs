//! Depth conversion
//!
//! Gray conversion and thresholding to a 1-bit state grid. A binary pixel
//! is ON (1) when the source is darker than the threshold, so dark ink on a
//! light background becomes foreground.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::Result;

impl Pix {
    /// Convert to an 8-bit grayscale image.
    ///
    /// - 1 bpp: ON becomes 0 (black), OFF becomes 255 (white)
    /// - 8 bpp: returned as a shared clone
    /// - 32 bpp: weighted luminance of the RGB channels
    pub fn convert_to_gray(&self) -> Result<Pix> {
        if self.depth() == PixelDepth::Bit8 {
            return Ok(self.clone());
        }

        let mut gray = Pix::new(self.width(), self.height(), PixelDepth::Bit8)?.to_mut();
        let src = self.data();
        let depth = self.depth();
        for (dst, &val) in gray.data_mut().iter_mut().zip(src) {
            *dst = match depth {
                PixelDepth::Bit1 => {
                    if val != 0 {
                        0
                    } else {
                        255
                    }
                }
                PixelDepth::Bit32 => {
                    let (r, g, b) = color::extract_rgb(val);
                    color::luminance(r, g, b) as u32
                }
                PixelDepth::Bit8 => val,
            };
        }
        Ok(gray.into())
    }

    /// Threshold to a 1-bit image.
    ///
    /// A pixel becomes ON when its gray value is strictly less than
    /// `threshold`. A threshold of 0 therefore yields an all-OFF image and
    /// 255 turns every non-white pixel ON. A 1-bit input is returned as a
    /// shared clone.
    pub fn convert_to_binary(&self, threshold: u8) -> Result<Pix> {
        if self.depth() == PixelDepth::Bit1 {
            return Ok(self.clone());
        }

        let gray = self.convert_to_gray()?;
        let mut binary = Pix::new(self.width(), self.height(), PixelDepth::Bit1)?.to_mut();
        for (dst, &val) in binary.data_mut().iter_mut().zip(gray.data()) {
            *dst = u32::from(val < u32::from(threshold));
        }
        Ok(binary.into())
    }

    /// Convert to a 32-bit RGB image.
    ///
    /// Gray values are replicated into all three channels; 1-bit ON pixels
    /// become black. A 32-bit input is returned as a shared clone.
    pub fn convert_to_32(&self) -> Result<Pix> {
        if self.depth() == PixelDepth::Bit32 {
            return Ok(self.clone());
        }

        let gray = self.convert_to_gray()?;
        let mut rgb = Pix::new(self.width(), self.height(), PixelDepth::Bit32)?.to_mut();
        for (dst, &val) in rgb.data_mut().iter_mut().zip(gray.data()) {
            let g = val as u8;
            *dst = color::compose_rgb(g, g, g);
        }
        Ok(rgb.into())
    }

    /// Count ON pixels in a 1-bit image, or nonzero pixels at other depths.
    pub fn count_on(&self) -> usize {
        self.data().iter().filter(|&&v| v != 0).count()
    }
}
