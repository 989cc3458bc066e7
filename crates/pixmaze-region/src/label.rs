//! Component labeling and rendering
//!
//! Assigns a dense label to every connected region in discovery order
//! (column-major scan, x outer) and renders each region in its own color.

use crate::conncomp::ConnectedRegions;
use crate::error::RegionResult;
use pixmaze_core::{Pix, PixelDepth, color};
use rand::Rng;

/// Color of the first discovered component (dark blue)
pub const FIRST_COMPONENT_COLOR: u32 = 0x0000_64ff;

const UNLABELED: u32 = u32::MAX;

/// Build a palette of `count` colors.
///
/// Entry 0 is always [`FIRST_COMPONENT_COLOR`]; the rest are drawn from
/// `rng`. Distinct entries are not guaranteed to differ.
pub fn component_palette<R: Rng>(count: usize, rng: &mut R) -> Vec<u32> {
    let mut palette = Vec::with_capacity(count);
    if count == 0 {
        return palette;
    }
    palette.push(FIRST_COMPONENT_COLOR);
    for _ in 1..count {
        palette.push(color::from_hex(rng.random_range(0..0xff_ffff)));
    }
    palette
}

/// Per-pixel component labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: usize,
}

impl ComponentLabels {
    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct labels.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Label of the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major label buffer.
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }
}

/// Label every region, numbering them in column-major discovery order.
///
/// The label buffer itself is stored row-major.
pub fn label_components(regions: &ConnectedRegions) -> ComponentLabels {
    let indexer = regions.indexer();
    let sets = regions.sets();
    let n = indexer.len();

    let mut root_label = vec![UNLABELED; n];
    let mut labels = vec![0u32; n];
    let mut next = 0u32;

    for x in 0..indexer.width() {
        for y in 0..indexer.height() {
            let id = indexer.to_id_unchecked(x, y);
            let root = sets.root(id);
            if root_label[root] == UNLABELED {
                root_label[root] = next;
                next += 1;
            }
            labels[id] = root_label[root];
        }
    }

    ComponentLabels {
        width: indexer.width(),
        height: indexer.height(),
        labels,
        count: next as usize,
    }
}

/// Render each region in a uniform color.
///
/// Returns the 32-bit image together with the labels it was painted from.
pub fn render_components<R: Rng>(
    regions: &ConnectedRegions,
    rng: &mut R,
) -> RegionResult<(Pix, ComponentLabels)> {
    let labels = label_components(regions);
    let palette = component_palette(labels.count(), rng);

    let mut out = Pix::new(labels.width(), labels.height(), PixelDepth::Bit32)?.to_mut();
    for (dst, &label) in out.data_mut().iter_mut().zip(labels.as_slice()) {
        *dst = palette[label as usize];
    }

    log::debug!("rendered {} components", labels.count());
    Ok((out.into(), labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn regions_from_rows(rows: &[&str]) -> ConnectedRegions {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let mut pm = Pix::new(w, h, PixelDepth::Bit1).unwrap().to_mut();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    pm.set_pixel(x as u32, y as u32, 1).unwrap();
                }
            }
        }
        ConnectedRegions::from_binary(&pm.into()).unwrap()
    }

    #[test]
    fn test_labels_in_discovery_order() {
        let regions = regions_from_rows(&["#..", "#.#", "..#"]);
        let labels = label_components(&regions);
        assert_eq!(labels.count(), regions.component_count());
        assert_eq!(labels.count(), 3);
        // column 0 is scanned first: the left bar, then the open area below it
        assert_eq!(labels.get(0, 0), Some(0));
        assert_eq!(labels.get(0, 1), Some(0));
        assert_eq!(labels.get(0, 2), Some(1));
        assert_eq!(labels.get(1, 0), Some(1));
        assert_eq!(labels.get(2, 1), Some(2));
        assert_eq!(labels.get(3, 0), None);
    }

    #[test]
    fn test_render_uniform_per_component() {
        let regions = regions_from_rows(&["###", "#.#", "###"]);
        let mut rng = StdRng::seed_from_u64(7);
        let (pix, labels) = render_components(&regions, &mut rng).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit32);
        assert_eq!(labels.count(), 2);

        for y in 0..3 {
            for x in 0..3 {
                let same = regions.are_connected(x, y, 0, 0).unwrap();
                let equal = pix.get_pixel(x, y) == pix.get_pixel(0, 0);
                if same {
                    assert!(equal);
                    assert_eq!(labels.get(x, y), labels.get(0, 0));
                } else {
                    assert!(!equal);
                    assert_ne!(labels.get(x, y), labels.get(0, 0));
                }
            }
        }
        assert_eq!(pix.get_pixel(0, 0), Some(FIRST_COMPONENT_COLOR));
        assert_ne!(pix.get_pixel(1, 1), pix.get_pixel(0, 0));
    }

    #[test]
    fn test_palette_seeded() {
        let a = component_palette(5, &mut StdRng::seed_from_u64(42));
        let b = component_palette(5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a[0], FIRST_COMPONENT_COLOR);
        assert!(a.iter().all(|&p| color::alpha(p) == 255));
        assert!(component_palette(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }
}
