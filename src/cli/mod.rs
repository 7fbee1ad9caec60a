//! CLI argument parsing for digraph
//!
//! Uses clap for argument parsing. The graph itself is described by global
//! flags (`--vertices`, `--edge`, `--remove-edge`) so every subcommand sees
//! the same graph.

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use digraph_core::format::OutputFormat;
use digraph_core::{Algorithm, Edge, FrontierStrategy, Vertex};
use parse::{parse_algorithm, parse_edge, parse_format, parse_link, parse_strategy};

/// Digraph - shortest paths in small directed graphs
#[derive(Parser, Debug)]
#[command(name = "digraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of vertices; vertices are numbered 1..=N
    #[arg(long, short = 'n', global = true)]
    pub vertices: Option<usize>,

    /// Edge as FROM,TO[,WEIGHT] (weight defaults to 1; repeatable)
    #[arg(long = "edge", short = 'e', global = true, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<Edge>,

    /// Remove the edge FROM,TO after all insertions (repeatable)
    #[arg(long = "remove-edge", global = true, value_parser = parse_link, action = clap::ArgAction::Append)]
    pub remove_edges: Vec<(Vertex, Vertex)>,

    /// Output format: human or json [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "DIGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress error text in human output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "digraph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency lists of the graph
    Graph,

    /// Print the shortest-path tree rooted at SOURCE
    Tree {
        /// Source vertex
        source: Vertex,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the shortest path from SOURCE to TARGET
    Path {
        /// Source vertex
        source: Vertex,

        /// Target vertex
        target: Vertex,

        #[command(flatten)]
        search: SearchArgs,
    },
}

/// Options shared by the shortest-path commands
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Shortest-path algorithm: bfs or dijkstra [default: from config, else dijkstra]
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Dijkstra frontier strategy: linear-scan or binary-heap [default: from config, else linear-scan]
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<FrontierStrategy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_graph_flags() {
        let cli = Cli::try_parse_from([
            "digraph", "-n", "3", "-e", "1,2,4", "--edge", "2:3", "--remove-edge", "1,2",
            "graph",
        ])
        .unwrap();

        assert_eq!(cli.vertices, Some(3));
        assert_eq!(cli.edges, vec![Edge::new(1, 2, 4), Edge::new(2, 3, 1)]);
        assert_eq!(cli.remove_edges, vec![(1, 2)]);
        assert!(matches!(cli.command, Some(Commands::Graph)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "digraph", "path", "1", "3", "-n", "3", "--format", "json", "--algorithm", "bfs",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Some(Commands::Path {
                source,
                target,
                search,
            }) => {
                assert_eq!((source, target), (1, 3));
                assert_eq!(search.algorithm, Some(Algorithm::Bfs));
                assert_eq!(search.strategy, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_edge() {
        assert!(Cli::try_parse_from(["digraph", "-n", "2", "-e", "1-2", "graph"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["digraph", "tree", "1", "--strategy", "fibonacci"]).is_err());
    }
}
