//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for hop-count shortest paths
//! - `dijkstra`: Weighted shortest paths with a choice of frontier strategy
//! - `shared`: Run state common to both algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_tree;
pub use dijkstra::dijkstra_tree;
pub use shared::{check_source, RunState};
