//! pixmaze-region - Region connectivity for pixmaze
//!
//! This crate partitions a binary image into 4-connected regions and
//! answers maze queries over them:
//!
//! - **Disjoint sets** - Union-find over grid cells
//! - **Connected regions** - Building and querying the partition
//! - **Markers** - Locating start/end points in a color image
//! - **Labeling** - Rendering each region in its own color
//! - **Maze** - The full pipeline from color image to solution flag
//!
//! # Examples
//!
//! ## Connected regions
//!
//! ```
//! use pixmaze_core::{Pix, PixelDepth};
//! use pixmaze_region::ConnectedRegions;
//!
//! // a 3x3 ring around an OFF center
//! let mut pm = Pix::new(3, 3, PixelDepth::Bit1).unwrap().to_mut();
//! for y in 0..3 {
//!     for x in 0..3 {
//!         if (x, y) != (1, 1) {
//!             pm.set_pixel(x, y, 1).unwrap();
//!         }
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let regions = ConnectedRegions::from_binary(&pix).unwrap();
//! assert_eq!(regions.component_count(), 2);
//! assert!(regions.are_connected(0, 0, 2, 2).unwrap());
//! assert!(!regions.are_connected(0, 0, 1, 1).unwrap());
//! ```
//!
//! ## Rendering components
//!
//! ```
//! use pixmaze_core::{Pix, PixelDepth};
//! use pixmaze_region::{ConnectedRegions, FIRST_COMPONENT_COLOR, render_components};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pix = Pix::new(8, 8, PixelDepth::Bit1).unwrap();
//! let regions = ConnectedRegions::from_binary(&pix).unwrap();
//! let (image, labels) = render_components(&regions, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(labels.count(), 1);
//! assert_eq!(image.get_pixel(7, 7), Some(FIRST_COMPONENT_COLOR));
//! ```

pub mod conncomp;
pub mod error;
pub mod index;
pub mod label;
pub mod marker;
pub mod maze;
pub mod union_find;

// Re-export core types
pub use pixmaze_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export region building and queries
pub use conncomp::{ConnectedRegions, build_regions};
pub use index::GridIndexer;
pub use union_find::DisjointSet;

// Re-export marker types and functions
pub use marker::{
    Endpoints, MarkerColor, MarkerHit, MarkerPredicate, highlight_markers, locate_markers,
};

// Re-export label types and functions
pub use label::{
    ComponentLabels, FIRST_COMPONENT_COLOR, component_palette, label_components,
    render_components,
};

// Re-export maze types
pub use maze::{DEFAULT_THRESHOLD, Maze, MazeOptions};
