//! Configuration for digraph
//!
//! An optional TOML file supplies defaults that command-line flags override.
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [search]
//! algorithm = "bfs"
//! strategy = "binary-heap"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;
use crate::graph::types::{Algorithm, FrontierStrategy};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigraphConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Shortest-path settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Shortest-path settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Algorithm used when a command does not name one
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Dijkstra frontier strategy used when a command does not name one
    #[serde(default)]
    pub strategy: FrontierStrategy,
}

impl DigraphConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
