// Command-line front end: reads a grid, prints the largest non-overlapping cluster box.

use anyhow::{Context, Result};
use clap::Parser;
use cluster_bbox::input;
use cluster_bbox::pipeline::{Adjacency, AnalyzerConfig, ClusterAnalyzer, DEFAULT_MARKER};
use cluster_bbox::render::{self, DEFAULT_CELL_SIZE, RenderError};
use cluster_bbox::{Grid, GridError};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cluster_bbox",
    version,
    about = "Find the largest non-overlapping bounding box around clusters of a marker character"
)]
struct Cli {
    /// Grid file to analyze, one row per line; `-` reads stdin
    #[arg(default_value = "groups.txt")]
    input: PathBuf,

    /// Character whose connected regions form clusters
    #[arg(short, long, default_value_t = DEFAULT_MARKER)]
    marker: char,

    /// Treat diagonal neighbours as connected
    #[arg(short, long)]
    diagonal: bool,

    /// Also write a PNG visualization of the analysis to this path
    #[arg(long, value_name = "PNG")]
    render: Option<PathBuf>,

    /// Pixel size of one grid cell in the PNG
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            marker: self.marker,
            adjacency: if self.diagonal {
                Adjacency::Octile
            } else {
                Adjacency::Cardinal
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // --- 1. Input ---
    let rows = input::load_rows(&cli.input).context("Error reading input")?;
    info!("read {} row(s) from {}", rows.len(), cli.input.display());

    let grid = Grid::from_rows(&rows)
        .inspect_err(|err: &GridError| warn!("rejecting input: {}", err))
        .with_context(|| format!("Invalid grid in {}", cli.input.display()))?;

    // --- 2. Analysis ---
    let config = cli.analyzer_config();
    let analyzer = ClusterAnalyzer::new(config.clone());
    let report = analyzer.analyze(&grid);

    // --- 3. Output ---
    if let Some(bounding_box) = &report.largest {
        println!("{}", bounding_box);
    }

    if let Some(path) = &cli.render {
        match render::render_grid(&grid, &config, &report, cli.cell_size) {
            Ok(image) => {
                render::save_png(path, &image)
                    .with_context(|| format!("Error saving {}", path.display()))?;
                info!("wrote visualization to {}", path.display());
            }
            Err(RenderError::EmptyGrid) => {
                warn!("grid is empty, skipping render to {}", path.display());
            }
            Err(err) => return Err(err).context("Error rendering grid"),
        }
    }

    Ok(())
}
