//! Maze connectivity regression test
//!
//! Loads small maze images with red start/end markers, checks the solution
//! flag and component count, and writes the rendered component images.
//!
//! Run with:
//! ```
//! cargo test -p pixmaze-region --test maze_reg
//! ```
//!
//! Keep the rendered images in tests/regout:
//! ```
//! REGTEST_MODE=display cargo test -p pixmaze-region --test maze_reg
//! ```

use pixmaze_core::ImageFormat;
use pixmaze_region::{Maze, MazeOptions};
use pixmaze_test::{RegParams, load_test_image};

#[test]
fn maze_reg() {
    let mut rp = RegParams::new("maze");
    let options = MazeOptions::default().with_seed(5);

    // -----------------------------------------------------------
    // Open maze: one passage from the left edge to the right edge
    // -----------------------------------------------------------
    let pixs = match load_test_image("maze-open.png") {
        Ok(pix) => pix,
        Err(e) => panic!("Failed to load test image: {}", e),
    };
    let maze = Maze::from_pix(&pixs, &options).expect("open maze");
    eprintln!(
        "open: solution = {}, components = {}",
        maze.has_solution(),
        maze.component_count()
    );

    // Index 0..4
    rp.check(maze.endpoints().is_complete(), "open: both markers found");
    rp.compare_values(0.0, maze.endpoints().start.point.0 as f64, 0.0);
    rp.compare_values(10.0, maze.endpoints().end.point.0 as f64, 0.0);
    rp.check(maze.has_solution(), "open: has solution");
    rp.compare_values(3.0, maze.component_count() as f64, 0.0);
    rp.compare_values(31.0, maze.binary().count_on() as f64, 0.0);

    let rendered = maze.component_image().expect("render open");
    rp.write_pix_and_check(&rendered, ImageFormat::Png)
        .expect("write open");

    // -----------------------------------------------------------
    // Closed maze: a wall cuts the passage in two
    // -----------------------------------------------------------
    let pixs = match load_test_image("maze-closed.png") {
        Ok(pix) => pix,
        Err(e) => panic!("Failed to load test image: {}", e),
    };
    let maze = Maze::from_pix(&pixs, &options).expect("closed maze");
    eprintln!(
        "closed: solution = {}, components = {}",
        maze.has_solution(),
        maze.component_count()
    );

    rp.check(maze.endpoints().is_complete(), "closed: both markers found");
    rp.check(!maze.has_solution(), "closed: no solution");
    rp.compare_values(3.0, maze.component_count() as f64, 0.0);
    rp.compare_values(30.0, maze.binary().count_on() as f64, 0.0);

    let rendered = maze.component_image().expect("render closed");
    rp.write_pix_and_check(&rendered, ImageFormat::Png)
        .expect("write closed");

    assert!(rp.cleanup(), "maze regression test failed");
}

#[test]
fn maze_formats_reg() {
    let mut rp = RegParams::new("maze_formats");
    let options = MazeOptions::default();

    // PNM and PNG copies of the same maze must give identical results
    for name in ["maze-open", "maze-closed"] {
        let png = load_test_image(&format!("{}.png", name)).expect("load png");
        let pnm = load_test_image(&format!("{}.ppm", name)).expect("load ppm");
        rp.compare_pix(&png.convert_to_32().unwrap(), &pnm.convert_to_32().unwrap());

        let a = Maze::from_pix(&png, &options).expect("maze from png");
        let b = Maze::from_pix(&pnm, &options).expect("maze from ppm");
        rp.check(
            a.has_solution() == b.has_solution(),
            &format!("{}: same solution flag", name),
        );
        rp.compare_values(
            a.component_count() as f64,
            b.component_count() as f64,
            0.0,
        );
        rp.compare_pix(a.binary(), b.binary());
    }

    assert!(rp.cleanup(), "maze formats regression test failed");
}
