//! pixmaze - Maze connectivity over images
//!
//! Decides whether two marked points in a maze image are joined by a
//! passage, by partitioning the thresholded image into 4-connected regions
//! with a disjoint-set forest.
//!
//! # Overview
//!
//! - Image I/O (PNG, binary PNM)
//! - Thresholding to a 1-bit state grid
//! - Start/end marker location
//! - Connected regions and reachability queries
//! - Rendering each region in its own color
//!
//! # Example
//!
//! ```
//! use pixmaze::{Pix, PixelDepth};
//! use pixmaze::region::{Maze, MazeOptions};
//!
//! let mut pm = Pix::new(5, 3, PixelDepth::Bit32).unwrap().to_mut();
//! pm.set_rgb(0, 0, 255, 0, 0).unwrap();
//! pm.set_rgb(4, 2, 255, 0, 0).unwrap();
//! let maze = Maze::from_pix(&pm.into(), &MazeOptions::default()).unwrap();
//! assert!(maze.has_solution());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixmaze_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixmaze_io as io;
pub use pixmaze_region as region;
