//! CLI commands for digraph

pub mod dispatch;
pub mod format;
pub mod graph;
pub mod path;
pub mod tree;
