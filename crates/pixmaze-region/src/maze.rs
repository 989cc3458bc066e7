//! Maze connectivity
//!
//! A maze is a color image whose dark pixels are passages and whose light
//! pixels are walls, with two marker pixels for the start and end points.
//! [`Maze::from_pix`] locates the markers, thresholds the unmarked image to
//! a state grid and partitions that grid into connected regions. The marker
//! highlight goes into a separate display copy only, so it never changes
//! which region a marker cell belongs to. The maze has a solution when both
//! endpoints land in the same region.
//!
//! # Example
//!
//! ```
//! use pixmaze_core::{Pix, PixelDepth};
//! use pixmaze_region::{Maze, MazeOptions};
//!
//! // a black corridor with red markers at both ends
//! let mut pm = Pix::new(4, 1, PixelDepth::Bit32).unwrap().to_mut();
//! pm.set_rgb(0, 0, 255, 0, 0).unwrap();
//! pm.set_rgb(3, 0, 255, 0, 0).unwrap();
//! let maze = Maze::from_pix(&pm.into(), &MazeOptions::default()).unwrap();
//! assert!(maze.has_solution());
//! assert_eq!(maze.component_count(), 1);
//! ```

use crate::conncomp::ConnectedRegions;
use crate::error::RegionResult;
use crate::label::render_components;
use crate::marker::{Endpoints, MarkerColor, highlight_markers, locate_markers};
use pixmaze_core::{Pix, color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default gray threshold; darker pixels are passages
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Options for building a [`Maze`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeOptions {
    /// Gray values strictly below this are ON (passage)
    pub threshold: u8,
    /// Marker color and tolerance
    pub marker: MarkerColor,
    /// RGBA pixel painted over the found markers in [`Maze::marked`]
    pub highlight: u32,
    /// Seed for the component palette; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for MazeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            marker: MarkerColor::default(),
            highlight: color::compose_rgb(0, 0, 0),
            seed: None,
        }
    }
}

impl MazeOptions {
    /// Set the binarization threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the marker color
    pub fn with_marker(mut self, marker: MarkerColor) -> Self {
        self.marker = marker;
        self
    }

    /// Set the highlight color
    pub fn with_highlight(mut self, r: u8, g: u8, b: u8) -> Self {
        self.highlight = color::compose_rgb(r, g, b);
        self
    }

    /// Seed the component palette
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A maze image analyzed for connectivity
#[derive(Debug, Clone)]
pub struct Maze {
    source: Pix,
    marked: Pix,
    binary: Pix,
    regions: ConnectedRegions,
    endpoints: Endpoints,
    seed: Option<u64>,
}

impl Maze {
    /// Analyze a maze image of any supported depth.
    ///
    /// Markers are only detectable in color input; gray and binary images
    /// are analyzed with both endpoints missing.
    pub fn from_pix(pix: &Pix, options: &MazeOptions) -> RegionResult<Self> {
        let source = pix.convert_to_32()?;
        let endpoints = locate_markers(&source, &options.marker)?;
        if endpoints.marker_count != 2 {
            log::warn!(
                "expected 2 markers, found {}; missing endpoints default to (0, 0)",
                endpoints.marker_count
            );
        }

        // Classify first; the highlight is display-only.
        let binary = source.convert_to_binary(options.threshold)?;
        let regions = ConnectedRegions::from_binary(&binary)?;

        let mut marked = source.to_mut();
        highlight_markers(&mut marked, &endpoints, options.highlight)?;
        let marked: Pix = marked.into();

        log::info!(
            "maze {}x{}: {} components, start {:?}, end {:?}",
            source.width(),
            source.height(),
            regions.component_count(),
            endpoints.start.get(),
            endpoints.end.get()
        );

        Ok(Self {
            source,
            marked,
            binary,
            regions,
            endpoints,
            seed: options.seed,
        })
    }

    /// Check whether the start and end points lie in the same region.
    ///
    /// A missing endpoint is taken as `(0, 0)`; inspect
    /// [`Maze::endpoints`] to tell that case apart.
    pub fn has_solution(&self) -> bool {
        self.regions
            .are_connected_unchecked(self.endpoints.start.point, self.endpoints.end.point)
    }

    /// Check whether two arbitrary points lie in the same region.
    pub fn are_connected(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> RegionResult<bool> {
        self.regions.are_connected(x1, y1, x2, y2)
    }

    /// Number of regions, passages and walls together.
    pub fn component_count(&self) -> usize {
        self.regions.component_count()
    }

    /// Render every region in its own color.
    ///
    /// Uses the configured seed when there is one.
    pub fn component_image(&self) -> RegionResult<Pix> {
        match self.seed {
            Some(seed) => self.component_image_with(&mut StdRng::seed_from_u64(seed)),
            None => self.component_image_with(&mut rand::rng()),
        }
    }

    /// Render every region with colors drawn from `rng`.
    pub fn component_image_with<R: Rng>(&self, rng: &mut R) -> RegionResult<Pix> {
        let (pix, _) = render_components(&self.regions, rng)?;
        Ok(pix)
    }

    /// Located start and end points.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The 32-bit source as it was classified.
    pub fn source(&self) -> &Pix {
        &self.source
    }

    /// The 32-bit source with the found markers painted in the highlight
    /// color.
    pub fn marked(&self) -> &Pix {
        &self.marked
    }

    /// The 1-bit state grid the regions were built from.
    pub fn binary(&self) -> &Pix {
        &self.binary
    }

    /// The region partition.
    pub fn regions(&self) -> &ConnectedRegions {
        &self.regions
    }
}
