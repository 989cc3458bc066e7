//! pixmaze-test - Regression test framework for pixmaze
//!
//! Regression tests accumulate numbered checks in a [`RegParams`] and
//! report every failure at the end instead of stopping at the first one.
//! Two modes are supported:
//!
//! - **Compare** (default): run the checks; images written along the way
//!   are removed once verified
//! - **Display**: run the checks and keep the written images in
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixmaze_test::RegParams;
//!
//! let mut rp = RegParams::new("maze");
//! rp.compare_values(2.0, maze.component_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "maze-open.ppm")
pub fn load_test_image(name: &str) -> TestResult<pixmaze_core::Pix> {
    let path = test_data_path(name);
    pixmaze_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixmaze-test is at crates/pixmaze-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
