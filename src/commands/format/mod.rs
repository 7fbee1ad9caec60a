//! Output formatting for graphs, trees and paths
//!
//! `human` reproduces the fixed-width tables; `json` builds pretty-printed
//! documents from the serializable core types. Both write to any
//! `io::Write` and return write failures as errors.

pub mod human;
pub mod json;

use std::io::Write;

use digraph_core::error::Result;

/// Write a JSON value, pretty-printed, followed by a newline
pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
