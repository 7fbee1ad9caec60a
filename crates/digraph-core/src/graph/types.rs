use crate::error::DigraphError;
use serde::{Deserialize, Serialize};

/// Vertex identifier, 1-based (there is no vertex 0)
pub type Vertex = usize;

/// Edge weight. Unsigned, so every graph is valid input for Dijkstra.
pub type Weight = u32;

/// Accumulated path cost: a hop count for BFS, a weight sum for Dijkstra
pub type Distance = u64;

/// A directed, weighted edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    /// Unit-weight edge, for graphs only searched with BFS
    pub fn unweighted(from: Vertex, to: Vertex) -> Self {
        Edge::new(from, to, 1)
    }

    /// Two edges are the same link iff they connect the same ordered pair,
    /// whatever their weights.
    pub fn links_same_vertices(&self, other: &Edge) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((from, to, weight): (Vertex, Vertex, Weight)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// Shortest-path algorithm that produced a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Unweighted breadth-first search (hop counts)
    Bfs,
    /// Dijkstra over non-negative weights
    #[default]
    Dijkstra,
}

impl std::str::FromStr for Algorithm {
    type Err = DigraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "unweighted" => Ok(Algorithm::Bfs),
            "dijkstra" | "weighted" => Ok(Algorithm::Dijkstra),
            other => Err(DigraphError::invalid_value(
                "algorithm (expected: bfs, dijkstra)",
                other,
            )),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// How Dijkstra picks the next frontier vertex.
///
/// Both strategies finalize vertices in the same order: smallest distance
/// first, lowest vertex index among equal distances. They therefore build
/// identical trees and differ only in running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierStrategy {
    /// Scan every vertex for the closest unfinished one, O(n^2 + m)
    #[default]
    LinearScan,
    /// Pop the closest vertex from a binary heap, O((n + m) log n)
    BinaryHeap,
}

impl std::str::FromStr for FrontierStrategy {
    type Err = DigraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-scan" | "linear" | "scan" => Ok(FrontierStrategy::LinearScan),
            "binary-heap" | "heap" => Ok(FrontierStrategy::BinaryHeap),
            other => Err(DigraphError::invalid_value(
                "strategy (expected: linear-scan, binary-heap)",
                other,
            )),
        }
    }
}

impl std::fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontierStrategy::LinearScan => write!(f, "linear-scan"),
            FrontierStrategy::BinaryHeap => write!(f, "binary-heap"),
        }
    }
}
