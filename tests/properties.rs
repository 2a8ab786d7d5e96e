//! Property-based tests for the cluster analyzer
//!
//! These tests verify invariants that should hold for all grids:
//! - At most one box is returned, and it is well formed
//! - The analysis is a pure function of the grid
//! - The winner is a discovered cluster box that overlaps no other
//! - No surviving box is strictly larger than the winner
//! - Every marker cell lies inside its own cluster's box

use cluster_bbox::core_modules::overlap_filter;
use cluster_bbox::{Adjacency, AnalyzerConfig, ClusterAnalyzer, Grid, compute_bounding_boxes};
use proptest::prelude::*;

/// Rectangular grids of up to 11x11 cells with roughly one marker in three.
fn grid_rows() -> impl Strategy<Value = Vec<String>> {
    (1usize..12, 1usize..12).prop_flat_map(|(height, width)| {
        prop::collection::vec(
            prop::collection::vec(prop::bool::weighted(0.35), width)
                .prop_map(|row| {
                    row.into_iter()
                        .map(|m| if m { '*' } else { '-' })
                        .collect::<String>()
                }),
            height,
        )
    })
}

fn adjacency() -> impl Strategy<Value = Adjacency> {
    prop_oneof![Just(Adjacency::Cardinal), Just(Adjacency::Octile)]
}

proptest! {
    #[test]
    fn prop_result_has_at_most_one_well_formed_box(rows in grid_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let result = compute_bounding_boxes(&grid);

        prop_assert!(result.len() <= 1);
        for b in &result {
            prop_assert!(b.min_row() <= b.max_row());
            prop_assert!(b.min_col() <= b.max_col());
            prop_assert!(b.max_row() < grid.height());
            prop_assert!(b.max_col() < grid.width());
        }
    }

    #[test]
    fn prop_analysis_is_deterministic(rows in grid_rows(), adjacency in adjacency()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let analyzer = ClusterAnalyzer::new(AnalyzerConfig { adjacency, ..AnalyzerConfig::default() });

        prop_assert_eq!(analyzer.analyze(&grid), analyzer.analyze(&grid));
    }

    #[test]
    fn prop_winner_is_an_isolated_cluster_box(rows in grid_rows(), adjacency in adjacency()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let analyzer = ClusterAnalyzer::new(AnalyzerConfig { adjacency, ..AnalyzerConfig::default() });
        let report = analyzer.analyze(&grid);

        if let Some(winner) = report.largest {
            let position = report
                .clusters
                .iter()
                .position(|c| c.bounding_box == winner);
            prop_assert!(position.is_some());
            let position = position.unwrap();

            for (i, cluster) in report.clusters.iter().enumerate() {
                if i != position {
                    prop_assert!(!winner.overlaps(&cluster.bounding_box));
                }
            }
            for survivor in &report.survivors {
                prop_assert!(survivor.area() <= winner.area());
            }
            // Earlier survivors must be strictly smaller.
            let first_with_max = report
                .survivors
                .iter()
                .find(|b| b.area() == winner.area());
            prop_assert_eq!(first_with_max, Some(&winner));
        } else {
            prop_assert!(report.survivors.is_empty());
        }
    }

    #[test]
    fn prop_survivors_match_pairwise_filter(rows in grid_rows()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let report = ClusterAnalyzer::default().analyze(&grid);
        let boxes: Vec<_> = report.clusters.iter().map(|c| c.bounding_box).collect();

        prop_assert_eq!(overlap_filter::non_overlapping(&boxes), report.survivors.clone());
        prop_assert_eq!(overlap_filter::largest(&report.survivors), report.largest);
    }

    #[test]
    fn prop_clusters_partition_marker_cells(rows in grid_rows(), adjacency in adjacency()) {
        let grid = Grid::from_rows(&rows).unwrap();
        let analyzer = ClusterAnalyzer::new(AnalyzerConfig { adjacency, ..AnalyzerConfig::default() });
        let report = analyzer.analyze(&grid);

        let markers = grid.cells().filter(|&(_, ch)| ch == '*').count();
        let assigned: usize = report.clusters.iter().map(|c| c.size_in_cells()).sum();
        prop_assert_eq!(markers, assigned);

        for cluster in &report.clusters {
            for &cell in &cluster.cells {
                prop_assert_eq!(grid.get(cell), Some('*'));
                prop_assert!(cluster.bounding_box.contains(cell));
            }
        }
    }

    #[test]
    fn prop_background_only_grid_is_empty(height in 1usize..12, width in 1usize..12) {
        let rows = vec!["-".repeat(width); height];
        let grid = Grid::from_rows(&rows).unwrap();
        prop_assert!(compute_bounding_boxes(&grid).is_empty());
    }
}
