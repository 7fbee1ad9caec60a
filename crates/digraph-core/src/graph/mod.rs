//! Directed graphs and single-source shortest paths
//!
//! - `digraph`: the mutable graph and its edge operations
//! - `algos`: BFS and Dijkstra producing shortest-path trees
//! - `tree` / `path`: reading results and reconstructing paths
//! - `traversal`: the adjacency trait the algorithms run against

pub mod algos;
pub mod digraph;
pub mod path;
pub mod traversal;
pub mod tree;
pub mod types;

pub use algos::{bfs_tree, dijkstra_tree};
pub use digraph::Digraph;
pub use path::PathResult;
pub use traversal::GraphProvider;
pub use tree::{ShortestPathTree, TreeRow};
pub use types::{Algorithm, Distance, Edge, FrontierStrategy, Vertex, Weight};
