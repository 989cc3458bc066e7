//! Start/end marker location
//!
//! Markers are pixels in the color source image that satisfy a
//! [`MarkerPredicate`]. The image is scanned column by column (x outer,
//! y inner); the first marker is the start point, the second the end point.
//!
//! A missing endpoint keeps the point `(0, 0)` with `found == false`, so a
//! real marker at the origin stays distinguishable from no marker at all.

use crate::error::{RegionError, RegionResult};
use pixmaze_core::{Pix, PixMut, PixelDepth, color};

/// Decides whether a 32-bit RGBA pixel is a marker.
pub trait MarkerPredicate {
    /// Returns `true` if `pixel` marks an endpoint.
    fn is_marker(&self, pixel: u32) -> bool;
}

impl<F> MarkerPredicate for F
where
    F: Fn(u32) -> bool,
{
    fn is_marker(&self, pixel: u32) -> bool {
        self(pixel)
    }
}

/// Marker matched by color, each channel within `tolerance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
    /// Target color
    pub rgb: (u8, u8, u8),
    /// Maximum per-channel difference still counted as a match
    pub tolerance: u8,
}

impl Default for MarkerColor {
    /// Pure red, exact match.
    fn default() -> Self {
        Self {
            rgb: (255, 0, 0),
            tolerance: 0,
        }
    }
}

impl MarkerColor {
    /// Exact match on the given color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            tolerance: 0,
        }
    }

    /// Exact match on a packed `0xRRGGBB` color.
    pub fn from_hex(rgb: u32) -> Self {
        let (r, g, b) = color::extract_rgb(color::from_hex(rgb));
        Self::new(r, g, b)
    }

    /// Set the per-channel tolerance.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl MarkerPredicate for MarkerColor {
    fn is_marker(&self, pixel: u32) -> bool {
        let (r, g, b) = color::extract_rgb(pixel);
        let (tr, tg, tb) = self.rgb;
        r.abs_diff(tr) <= self.tolerance
            && g.abs_diff(tg) <= self.tolerance
            && b.abs_diff(tb) <= self.tolerance
    }
}

/// One located endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerHit {
    /// Whether a marker was actually found
    pub found: bool,
    /// Marker position, `(0, 0)` when not found
    pub point: (u32, u32),
}

impl MarkerHit {
    /// A hit at `(x, y)`.
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            found: true,
            point: (x, y),
        }
    }

    /// No marker; the point defaults to the origin.
    pub fn missing() -> Self {
        Self::default()
    }

    /// The point, if a marker was found.
    pub fn get(&self) -> Option<(u32, u32)> {
        self.found.then_some(self.point)
    }
}

/// Result of a marker scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Endpoints {
    /// First marker in scan order
    pub start: MarkerHit,
    /// Second marker in scan order
    pub end: MarkerHit,
    /// Total number of marker pixels seen (extra ones are ignored)
    pub marker_count: usize,
}

impl Endpoints {
    /// Check whether both endpoints were found.
    pub fn is_complete(&self) -> bool {
        self.start.found && self.end.found
    }
}

/// Scan a 32-bit image for start and end markers.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `pix` is not 32 bpp.
pub fn locate_markers<P>(pix: &Pix, predicate: &P) -> RegionResult<Endpoints>
where
    P: MarkerPredicate + ?Sized,
{
    if pix.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit",
            actual: pix.depth().bits(),
        });
    }

    let mut endpoints = Endpoints::default();
    for x in 0..pix.width() {
        for y in 0..pix.height() {
            if !predicate.is_marker(pix.get_pixel_unchecked(x, y)) {
                continue;
            }
            log::debug!("marker at ({}, {})", x, y);
            endpoints.marker_count += 1;
            if !endpoints.start.found {
                endpoints.start = MarkerHit::at(x, y);
            } else if !endpoints.end.found {
                endpoints.end = MarkerHit::at(x, y);
            }
        }
    }

    Ok(endpoints)
}

/// Paint the found endpoints with `highlight`.
///
/// Endpoints that were not found are left untouched.
pub fn highlight_markers(
    pix: &mut PixMut,
    endpoints: &Endpoints,
    highlight: u32,
) -> RegionResult<()> {
    for hit in [endpoints.start, endpoints.end] {
        if let Some((x, y)) = hit.get() {
            pix.set_pixel(x, y, highlight)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_pix(w: u32, h: u32) -> PixMut {
        let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().to_mut();
        for v in pm.data_mut() {
            *v = color::compose_rgb(255, 255, 255);
        }
        pm
    }

    #[test]
    fn test_two_markers_column_major() {
        let mut pm = white_pix(5, 5);
        pm.set_rgb(3, 0, 255, 0, 0).unwrap();
        pm.set_rgb(1, 4, 255, 0, 0).unwrap();
        let pix: Pix = pm.into();

        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        // column 1 is scanned before column 3
        assert_eq!(ep.start, MarkerHit::at(1, 4));
        assert_eq!(ep.end, MarkerHit::at(3, 0));
        assert_eq!(ep.marker_count, 2);
        assert!(ep.is_complete());
    }

    #[test]
    fn test_single_marker_end_defaults_to_origin() {
        let mut pm = white_pix(4, 4);
        pm.set_rgb(2, 3, 255, 0, 0).unwrap();
        let pix: Pix = pm.into();

        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        assert_eq!(ep.start.get(), Some((2, 3)));
        assert!(!ep.end.found);
        assert_eq!(ep.end.point, (0, 0));
        assert_eq!(ep.end.get(), None);
        assert!(!ep.is_complete());
    }

    #[test]
    fn test_no_markers() {
        let pix: Pix = white_pix(3, 3).into();
        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        assert_eq!(ep, Endpoints::default());
        assert_eq!(ep.marker_count, 0);
    }

    #[test]
    fn test_marker_at_origin_is_found() {
        let mut pm = white_pix(3, 3);
        pm.set_rgb(0, 0, 255, 0, 0).unwrap();
        pm.set_rgb(2, 2, 255, 0, 0).unwrap();
        let pix: Pix = pm.into();

        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        assert_eq!(ep.start, MarkerHit::at(0, 0));
        assert_eq!(ep.end, MarkerHit::at(2, 2));
    }

    #[test]
    fn test_extra_markers_ignored() {
        let mut pm = white_pix(3, 1);
        for x in 0..3 {
            pm.set_rgb(x, 0, 255, 0, 0).unwrap();
        }
        let pix: Pix = pm.into();

        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        assert_eq!(ep.start.point, (0, 0));
        assert_eq!(ep.end.point, (1, 0));
        assert_eq!(ep.marker_count, 3);
    }

    #[test]
    fn test_tolerance_and_custom_predicate() {
        let mut pm = white_pix(3, 1);
        pm.set_rgb(0, 0, 250, 4, 0).unwrap();
        pm.set_rgb(2, 0, 0, 200, 0).unwrap();
        let pix: Pix = pm.into();

        let exact = locate_markers(&pix, &MarkerColor::default()).unwrap();
        assert_eq!(exact.marker_count, 0);
        let loose = locate_markers(&pix, &MarkerColor::default().with_tolerance(5)).unwrap();
        assert_eq!(loose.start.get(), Some((0, 0)));

        let greenish = |p: u32| color::green(p) > 150 && color::red(p) < 50;
        let ep = locate_markers(&pix, &greenish).unwrap();
        assert_eq!(ep.start.get(), Some((2, 0)));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(MarkerColor::from_hex(0x00ff7f).rgb, (0, 255, 127));
    }

    #[test]
    fn test_highlight_only_found() {
        let mut pm = white_pix(3, 3);
        pm.set_rgb(1, 1, 255, 0, 0).unwrap();
        let pix: Pix = pm.into();
        let ep = locate_markers(&pix, &MarkerColor::default()).unwrap();
        let mut pm = pix.to_mut();
        let black = color::compose_rgb(0, 0, 0);
        highlight_markers(&mut pm, &ep, black).unwrap();
        assert_eq!(pm.get_pixel(1, 1), Some(black));
        // the missing end point (0, 0) is not painted
        assert_eq!(pm.get_pixel(0, 0), Some(color::compose_rgb(255, 255, 255)));
    }

    #[test]
    fn test_requires_rgb() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            locate_markers(&pix, &MarkerColor::default()),
            Err(RegionError::UnsupportedDepth { actual: 8, .. })
        ));
    }
}
