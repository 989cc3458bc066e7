//! Coordinate indexing
//!
//! Maps grid coordinates to dense cell ids `y * width + x` and back.

use crate::error::{RegionError, RegionResult};
use pixmaze_core::Pix;

/// Bijection between `(x, y)` coordinates and ids in `[0, width * height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndexer {
    width: u32,
    height: u32,
}

impl GridIndexer {
    /// Create an indexer for a `width x height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create an indexer matching the dimensions of an image.
    pub fn for_pix(pix: &Pix) -> Self {
        Self::new(pix.width(), pix.height())
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidCoordinate`] when `(x, y)` is outside
    /// the grid.
    pub fn to_id(&self, x: u32, y: u32) -> RegionResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(RegionError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.to_id_unchecked(x, y))
    }

    /// Id of the cell at `(x, y)`; the caller guarantees it is in range.
    #[inline]
    pub fn to_id_unchecked(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Coordinates of cell `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidId`] when `id >= len()`.
    pub fn to_point(&self, id: usize) -> RegionResult<(u32, u32)> {
        if id >= self.len() {
            return Err(RegionError::InvalidId {
                id,
                len: self.len(),
            });
        }
        Ok(self.to_point_unchecked(id))
    }

    /// Coordinates of cell `id`; the caller guarantees it is in range.
    #[inline]
    pub fn to_point_unchecked(&self, id: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((id % w) as u32, (id / w) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bijection() {
        let idx = GridIndexer::new(7, 5);
        let mut seen = vec![false; idx.len()];
        for y in 0..5 {
            for x in 0..7 {
                let id = idx.to_id(x, y).unwrap();
                assert!(!seen[id], "id {} assigned twice", id);
                seen[id] = true;
                assert_eq!(idx.to_point(id).unwrap(), (x, y));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_row_major_layout() {
        let idx = GridIndexer::new(4, 3);
        assert_eq!(idx.to_id(0, 0).unwrap(), 0);
        assert_eq!(idx.to_id(3, 0).unwrap(), 3);
        assert_eq!(idx.to_id(0, 1).unwrap(), 4);
        assert_eq!(idx.to_id(3, 2).unwrap(), 11);
    }

    #[test]
    fn test_out_of_range() {
        let idx = GridIndexer::new(4, 3);
        assert!(matches!(
            idx.to_id(4, 0),
            Err(RegionError::InvalidCoordinate { x: 4, y: 0, .. })
        ));
        assert!(idx.to_id(0, 3).is_err());
        assert!(matches!(
            idx.to_point(12),
            Err(RegionError::InvalidId { id: 12, len: 12 })
        ));
    }
}
