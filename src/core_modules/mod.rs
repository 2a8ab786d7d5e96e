pub mod bounding_box;
pub mod cluster;
pub mod cluster_detector;
pub mod config;
pub mod grid;
pub mod overlap_filter;
