// THEORY:
// The `pipeline` module is the top-level API of the analysis engine. It chains the
// core modules into one staged pass and hides them behind a small interface:
// configure a `ClusterAnalyzer`, hand it a grid, receive either the full
// `AnalysisReport` or just the winning box.

use crate::core_modules::bounding_box::BoundingBox;
use crate::core_modules::cluster::Cluster;
use crate::core_modules::cluster_detector::cluster_detector;
use crate::core_modules::grid::{Grid, GridError};
use crate::core_modules::overlap_filter;
use log::debug;

// Re-export configuration types for the public API.
pub use crate::core_modules::config::{Adjacency, AnalyzerConfig, DEFAULT_MARKER};

/// Everything a single pass produced, stage by stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisReport {
    /// All clusters in discovery order.
    pub clusters: Vec<Cluster>,
    /// Boxes that overlap no other box, in discovery order.
    pub survivors: Vec<BoundingBox>,
    /// The largest survivor, if any.
    pub largest: Option<BoundingBox>,
}

/// The main, top-level struct for the analysis engine. Holds configuration only;
/// every call owns its own working state.
#[derive(Debug, Clone, Default)]
pub struct ClusterAnalyzer {
    config: AnalyzerConfig,
}

impl ClusterAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, grid: &Grid) -> AnalysisReport {
        if grid.is_empty() {
            debug!("empty grid, nothing to analyze");
            return AnalysisReport::default();
        }

        // Stage 1: Spatial Grouping
        let clusters = cluster_detector::find_clusters(grid, &self.config);
        debug!(
            "found {} cluster(s) of '{}' in a {}x{} grid",
            clusters.len(),
            self.config.marker,
            grid.height(),
            grid.width()
        );

        // Stage 2: Overlap Exclusion
        let boxes: Vec<BoundingBox> = clusters.iter().map(|c| c.bounding_box).collect();
        let survivors = overlap_filter::non_overlapping(&boxes);
        debug!("{} of {} box(es) overlap nothing", survivors.len(), boxes.len());

        // Stage 3: Selection
        let largest = overlap_filter::largest(&survivors);
        match &largest {
            Some(b) => debug!("selected {} with area {}", b, b.area()),
            None => debug!("no box survived filtering"),
        }

        AnalysisReport {
            clusters,
            survivors,
            largest,
        }
    }

    /// Returns the largest non-overlapping box as a zero- or one-element vector.
    pub fn compute_bounding_boxes(&self, grid: &Grid) -> Vec<BoundingBox> {
        self.analyze(grid).largest.into_iter().collect()
    }

    /// Validates `lines` into a grid, then runs `compute_bounding_boxes`.
    pub fn compute_bounding_boxes_from_lines<I, S>(
        &self,
        lines: I,
    ) -> Result<Vec<BoundingBox>, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grid = Grid::from_rows(lines)?;
        Ok(self.compute_bounding_boxes(&grid))
    }
}

/// Runs the default analyzer (`*` marker, cardinal adjacency) over `grid`.
pub fn compute_bounding_boxes(grid: &Grid) -> Vec<BoundingBox> {
    ClusterAnalyzer::default().compute_bounding_boxes(grid)
}
