//! Command trait and context for dispatching commands

use std::io::Write;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat, SearchArgs};
use digraph_core::config::DigraphConfig;
use digraph_core::error::Result;
use digraph_core::{
    bail_usage, trace_time, Algorithm, Digraph, Edge, FrontierStrategy, ShortestPathTree, Vertex,
};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: DigraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: DigraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format: flag, then config file, then human
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    pub fn algorithm(&self, search: &SearchArgs) -> Algorithm {
        search.algorithm.unwrap_or(self.config.search.algorithm)
    }

    pub fn strategy(&self, search: &SearchArgs) -> FrontierStrategy {
        search.strategy.unwrap_or(self.config.search.strategy)
    }

    /// Build the graph described by `--vertices`, `--edge` and `--remove-edge`
    pub fn build_graph(&self) -> Result<Digraph> {
        let Some(n) = self.cli.vertices else {
            bail_usage!("--vertices is required to describe a graph");
        };

        let mut graph = Digraph::from_edges(self.cli.edges.iter().copied(), n)?;
        for &(from, to) in &self.cli.remove_edges {
            graph.remove_edge(Edge::new(from, to, 0))?;
        }

        trace_time!(
            self.start,
            "build_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }

    /// Run the search selected by `search` and the config from `source`
    pub fn shortest_paths(
        &self,
        graph: &Digraph,
        source: Vertex,
        search: &SearchArgs,
    ) -> Result<ShortestPathTree> {
        let tree = match self.algorithm(search) {
            Algorithm::Bfs => graph.uwsssp(source)?,
            Algorithm::Dijkstra => graph.pwsssp_with(source, self.strategy(search))?,
        };
        trace_time!(
            self.start,
            "shortest_paths",
            source = source,
            reachable = tree.reachable_count()
        );
        Ok(tree)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "digraph {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out)?;
        writeln!(out, "Shortest paths in small directed graphs.")?;
        writeln!(out)?;
        writeln!(out, "Run `digraph --help` for usage information.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use digraph_core::error::DigraphError;

    fn ctx_for(args: &[&str], config: DigraphConfig) -> (Cli, DigraphConfig) {
        (Cli::try_parse_from(args.iter().copied()).unwrap(), config)
    }

    #[test]
    fn test_build_graph_applies_removals_after_insertions() {
        let (cli, config) = ctx_for(
            &[
                "digraph", "-n", "3", "-e", "1,2", "-e", "2,3", "--remove-edge", "1,2", "graph",
            ],
            DigraphConfig::default(),
        );
        let ctx = CommandContext::new(&cli, config, Instant::now());
        let graph = ctx.build_graph().unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(2, 3).unwrap());
    }

    #[test]
    fn test_build_graph_requires_vertices() {
        let (cli, config) = ctx_for(&["digraph", "graph"], DigraphConfig::default());
        let ctx = CommandContext::new(&cli, config, Instant::now());
        assert!(matches!(
            ctx.build_graph(),
            Err(DigraphError::UsageError(_))
        ));
    }

    #[test]
    fn test_build_graph_missing_removal_fails() {
        let (cli, config) = ctx_for(
            &["digraph", "-n", "2", "--remove-edge", "1,2", "graph"],
            DigraphConfig::default(),
        );
        let ctx = CommandContext::new(&cli, config, Instant::now());
        assert!(matches!(
            ctx.build_graph(),
            Err(DigraphError::EdgeNotFound { from: 1, to: 2 })
        ));
    }

    #[test]
    fn test_shortest_paths_follows_config_algorithm() {
        let mut config = DigraphConfig::default();
        config.search.algorithm = Algorithm::Bfs;

        let (cli, config) = ctx_for(
            &["digraph", "-n", "3", "-e", "1,2,1", "-e", "2,3,1", "-e", "1,3,5", "graph"],
            config,
        );
        let ctx = CommandContext::new(&cli, config, Instant::now());
        let graph = ctx.build_graph().unwrap();
        let tree = ctx
            .shortest_paths(&graph, 1, &SearchArgs::default())
            .unwrap();

        assert_eq!(tree.algorithm(), Algorithm::Bfs);
        assert_eq!(tree.distance(3).unwrap(), Some(1));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = DigraphConfig::default();
        config.output.format = OutputFormat::Json;
        config.search.algorithm = Algorithm::Bfs;
        config.search.strategy = FrontierStrategy::BinaryHeap;

        let (cli, config) = ctx_for(&["digraph", "--format", "human", "graph"], config);
        let ctx = CommandContext::new(&cli, config, Instant::now());
        let search = SearchArgs {
            algorithm: Some(Algorithm::Dijkstra),
            strategy: None,
        };

        assert_eq!(ctx.format(), OutputFormat::Human);
        assert_eq!(ctx.algorithm(&search), Algorithm::Dijkstra);
        assert_eq!(ctx.strategy(&search), FrontierStrategy::BinaryHeap);
    }
}
