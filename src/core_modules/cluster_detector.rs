// THEORY:
// The `ClusterDetector` is the engine of the spatial grouping layer. It implements a
// plain binary connected-component analysis: a cell either carries the marker or it
// does not, and clusters are the connected regions of marker cells.
//
// Key architectural principles & algorithm steps:
// 1.  **Row-Major Seeding**: The grid is scanned row by row. The first unvisited
//     marker cell met by the scan becomes the seed of a new cluster, which fixes the
//     discovery order that later tie-breaks depend on.
// 2.  **Region Growing**: From each seed the region grows through an explicit
//     worklist rather than recursion, so very large clusters cannot exhaust the call
//     stack. Whether the worklist is popped as a stack or a queue does not change the
//     resulting set of cells or its bounding box.
// 3.  **Visited Arena**: A 2D boolean grid, owned by a single call, guarantees that
//     every marker cell is assigned to exactly one cluster.
// 4.  **Stateless Utility**: `find_clusters` takes a grid and produces clusters for
//     that grid only. Nothing survives between calls.

use crate::core_modules::bounding_box::BoundingBox;
use crate::core_modules::cluster::Cluster;
use crate::core_modules::config::AnalyzerConfig;
use crate::core_modules::grid::{Cell, Grid};

pub mod cluster_detector {
    use super::*;

    /// Identifies every cluster of marker cells, in discovery order.
    pub fn find_clusters(grid: &Grid, config: &AnalyzerConfig) -> Vec<Cluster> {
        let mut visited = vec![vec![false; grid.width()]; grid.height()];
        let mut clusters: Vec<Cluster> = Vec::new();

        for (cell, ch) in grid.cells() {
            if ch != config.marker || visited[cell.row][cell.col] {
                continue;
            }

            let cluster = grow_cluster_from_seed(cell, clusters.len(), grid, &mut visited, config);
            clusters.push(cluster);
        }

        clusters
    }

    /// Collects every marker cell connected to `seed` and folds them into a box.
    fn grow_cluster_from_seed(
        seed: Cell,
        id: usize,
        grid: &Grid,
        visited: &mut [Vec<bool>],
        config: &AnalyzerConfig,
    ) -> Cluster {
        let mut cells: Vec<Cell> = Vec::new();
        let mut worklist: Vec<Cell> = vec![seed];
        let mut bounding_box = BoundingBox::from_cell(seed);
        visited[seed.row][seed.col] = true;

        while let Some(current) = worklist.pop() {
            cells.push(current);

            for &(d_row, d_col) in config.adjacency.offsets() {
                let Some(next) = grid.offset(current, d_row, d_col) else {
                    continue;
                };

                if !visited[next.row][next.col] && grid.get(next) == Some(config.marker) {
                    visited[next.row][next.col] = true;
                    bounding_box = bounding_box.expand_to(next);
                    worklist.push(next);
                }
            }
        }

        Cluster {
            id,
            seed,
            cells,
            bounding_box,
        }
    }
}
