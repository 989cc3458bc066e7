//! Connected region analysis
//!
//! This module partitions a binary image into maximal 4-connected regions
//! of equal pixel state (ON regions and OFF regions alike) using a
//! [`DisjointSet`], and answers reachability queries over the result.

use crate::error::{RegionError, RegionResult};
use crate::index::GridIndexer;
use crate::union_find::DisjointSet;
use pixmaze_core::{Pix, PixelDepth};

/// Merge every pair of 4-adjacent cells that share a state.
///
/// Each cell is compared with its right and lower neighbor only, so every
/// grid edge is examined exactly once. A pair already in the same set is
/// skipped, which makes a second pass over the same universe a no-op.
///
/// # Arguments
///
/// * `binary` - 1-bit state grid
/// * `sets` - universe with exactly `width * height` elements
///
/// # Returns
///
/// The number of merges performed.
///
/// # Errors
///
/// Returns an error if `binary` is not 1 bpp or `sets` has the wrong size.
pub fn build_regions(binary: &Pix, sets: &mut DisjointSet) -> RegionResult<usize> {
    if binary.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bit",
            actual: binary.depth().bits(),
        });
    }

    let indexer = GridIndexer::for_pix(binary);
    if sets.len() != indexer.len() {
        return Err(RegionError::InvalidParameters(format!(
            "universe has {} elements, grid has {} cells",
            sets.len(),
            indexer.len()
        )));
    }

    let width = binary.width();
    let height = binary.height();
    let mut unions = 0usize;

    let mut connect = |sets: &mut DisjointSet, x1: u32, y1: u32, x2: u32, y2: u32| {
        if binary.get_pixel_unchecked(x1, y1) != binary.get_pixel_unchecked(x2, y2) {
            return;
        }
        let a = indexer.to_id_unchecked(x1, y1);
        let b = indexer.to_id_unchecked(x2, y2);
        if sets.find(a) != sets.find(b) && sets.union(a, b) {
            unions += 1;
        }
    };

    for x in 0..width {
        for y in 0..height {
            if x + 1 < width {
                connect(sets, x, y, x + 1, y);
            }
            if y + 1 < height {
                connect(sets, x, y, x, y + 1);
            }
        }
    }

    Ok(unions)
}

/// The finished partition of a binary image into connected regions
///
/// Built once; every query afterwards is read-only.
#[derive(Debug, Clone)]
pub struct ConnectedRegions {
    indexer: GridIndexer,
    sets: DisjointSet,
}

impl ConnectedRegions {
    /// Partition a 1-bit image into 4-connected same-state regions.
    pub fn from_binary(binary: &Pix) -> RegionResult<Self> {
        let indexer = GridIndexer::for_pix(binary);
        let mut sets = DisjointSet::new(indexer.len());
        let unions = build_regions(binary, &mut sets)?;
        sets.flatten();

        log::debug!(
            "built regions for {}x{} grid: {} unions, {} components",
            indexer.width(),
            indexer.height(),
            unions,
            sets.component_count()
        );

        Ok(Self { indexer, sets })
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.indexer.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.indexer.height()
    }

    /// The coordinate indexer for this grid.
    pub fn indexer(&self) -> &GridIndexer {
        &self.indexer
    }

    /// The underlying disjoint-set universe.
    pub fn sets(&self) -> &DisjointSet {
        &self.sets
    }

    /// Number of connected regions (ON and OFF regions together).
    pub fn component_count(&self) -> usize {
        self.sets.component_count()
    }

    /// Check whether `(x1, y1)` and `(x2, y2)` lie in the same region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidCoordinate`] if either point is
    /// outside the grid.
    pub fn are_connected(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> RegionResult<bool> {
        let a = self.indexer.to_id(x1, y1)?;
        let b = self.indexer.to_id(x2, y2)?;
        Ok(self.sets.same_set(a, b))
    }

    /// Same as [`ConnectedRegions::are_connected`] for points known to be
    /// inside the grid.
    pub fn are_connected_unchecked(&self, p1: (u32, u32), p2: (u32, u32)) -> bool {
        let a = self.indexer.to_id_unchecked(p1.0, p1.1);
        let b = self.indexer.to_id_unchecked(p2.0, p2.1);
        self.sets.same_set(a, b)
    }

    /// Representative cell id of the region containing `(x, y)`.
    pub fn representative(&self, x: u32, y: u32) -> RegionResult<usize> {
        let id = self.indexer.to_id(x, y)?;
        Ok(self.sets.root(id))
    }

    /// Number of pixels in the region containing `(x, y)`.
    pub fn component_size(&self, x: u32, y: u32) -> RegionResult<usize> {
        let id = self.indexer.to_id(x, y)?;
        Ok(self.sets.set_size(id))
    }
}
