// THEORY:
// This file is the main entry point for the `cluster_bbox` library crate. It exports
// the `ClusterAnalyzer` and its configuration as the high-level interface. The core
// modules (grid, detection, filtering) stay public for inspection and testing, but a
// typical caller only needs `pipeline`.
//
// `input` and `render` are the I/O edges: reading rows from a file or stream, and
// painting an analysis into a PNG. The analysis itself never touches either.

pub mod core_modules;
pub mod input;
pub mod pipeline;
pub mod render;

pub use core_modules::bounding_box::BoundingBox;
pub use core_modules::grid::{Grid, GridError};
pub use pipeline::{
    Adjacency, AnalysisReport, AnalyzerConfig, ClusterAnalyzer, compute_bounding_boxes,
};
