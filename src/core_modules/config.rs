// THEORY:
// The analyzer has exactly two knobs: which character marks a cell as part of a
// cluster, and which neighbours count as connected. Both live here as plain values
// that are passed into each pass; there is no process-wide state.

pub const DEFAULT_MARKER: char = '*';

const CARDINAL_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];
const OCTILE_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Which neighbours count as connected during region growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Up, down, left and right only.
    #[default]
    Cardinal,
    /// The four cardinal neighbours plus the four diagonals.
    Octile,
}

impl Adjacency {
    /// (row, col) offsets of the neighbours to visit.
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::Cardinal => &CARDINAL_OFFSETS,
            Adjacency::Octile => &OCTILE_OFFSETS,
        }
    }
}

/// Configuration for the ClusterAnalyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// The character whose connected regions are clustered.
    pub marker: char,
    pub adjacency: Adjacency,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            adjacency: Adjacency::Cardinal,
        }
    }
}
