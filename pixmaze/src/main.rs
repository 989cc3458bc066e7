use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pixmaze::ImageFormat;
use pixmaze::region::{MarkerColor, Maze, MazeOptions};

/// pixmaze - Check whether a maze image connects its two markers
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input maze image (PNG or PNM)
    input: PathBuf,

    /// Component image output [<input-stem>.components.png]
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Gray values below this are passages [128]
    #[arg(short = 't', long = "threshold", default_value_t = 128)]
    threshold: u8,

    /// Marker color as RRGGBB [ff0000]
    #[arg(short = 'm', long = "marker", default_value = "ff0000", value_parser = parse_hex)]
    marker: u32,

    /// Per-channel marker color tolerance [0]
    #[arg(long = "tolerance", default_value_t = 0)]
    tolerance: u8,

    /// Color painted over the markers in the --marked image, RRGGBB [000000]
    #[arg(long = "highlight", default_value = "000000", value_parser = parse_hex)]
    highlight: u32,

    /// Also write the input with its markers highlighted
    #[arg(long = "marked")]
    marked: Option<PathBuf>,

    /// Seed for the component colors
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hex(s: &str) -> std::result::Result<u32, String> {
    let digits = s.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(format!("expected 6 hex digits, got '{}'", s));
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid color '{}': {}", s, e))
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "maze".to_string());
    input.with_file_name(format!("{}.components.png", stem))
}

fn output_format(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => match ImageFormat::from_extension(ext) {
            ImageFormat::Unknown => ImageFormat::Png,
            f => f,
        },
        None => ImageFormat::Png,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let pix = pixmaze::io::read_image(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let (r, g, b) = pixmaze::color::extract_rgb(pixmaze::color::from_hex(args.highlight));
    let mut options = MazeOptions::default()
        .with_threshold(args.threshold)
        .with_marker(MarkerColor::from_hex(args.marker).with_tolerance(args.tolerance))
        .with_highlight(r, g, b);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let maze = Maze::from_pix(&pix, &options).context("failed to analyze maze")?;

    println!("{}", maze.has_solution());
    println!("Number of components: {}", maze.component_count());

    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    let image = maze
        .component_image()
        .context("failed to render components")?;
    pixmaze::io::write_image(&image, &output, output_format(&output))
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());

    if let Some(marked) = &args.marked {
        pixmaze::io::write_image(maze.marked(), marked, output_format(marked))
            .with_context(|| format!("failed to write {}", marked.display()))?;
        log::info!("wrote {}", marked.display());
    }

    Ok(())
}
