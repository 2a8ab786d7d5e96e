// THEORY:
// A `Cluster` is one spatially coherent region of marker cells found in a single
// grid. It is the output of the detection layer and the input of the filtering
// layer.
//
// Key architectural principles:
// 1.  **Spatial Cohesion**: Every cell in a cluster is reachable from every other
//     through marker cells under the configured adjacency rule.
// 2.  **Data Aggregation**: Instead of a loose bag of coordinates, later stages work
//     with a single object that already knows its bounding box and size.
// 3.  **Stateless Data Container**: A cluster is created once during a pass and
//     never merged, split or updated afterwards.

use crate::core_modules::bounding_box::BoundingBox;
use crate::core_modules::grid::Cell;

/// A maximal connected region of marker cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Discovery index within a single analysis pass. Not persistent.
    pub id: usize,
    /// The first cell of the cluster reached by the row-major scan.
    pub seed: Cell,
    /// Every cell in the cluster, in traversal order.
    pub cells: Vec<Cell>,
    /// The tight inclusive box around `cells`.
    pub bounding_box: BoundingBox,
}

impl Cluster {
    /// Number of marker cells, as opposed to the area of the bounding box.
    pub fn size_in_cells(&self) -> usize {
        self.cells.len()
    }
}
