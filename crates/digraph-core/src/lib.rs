//! Digraph Core Library
//!
//! Directed graphs over the vertices `1..=n` with edge insertion and removal,
//! plus unweighted (BFS) and weighted (Dijkstra) single-source shortest-path
//! trees and path reconstruction.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{DigraphError, Result};
pub use graph::{
    Algorithm, Digraph, Distance, Edge, FrontierStrategy, PathResult, ShortestPathTree, TreeRow,
    Vertex, Weight,
};
