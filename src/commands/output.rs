//! Shared output helpers for human and JSON rendering

use std::fmt::Display;

use graphkit_core::error::Result;
use graphkit_core::graph::NodeId;

/// Print a JSON value to stdout, pretty-printed
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a distance, using -1 for unreachable nodes
pub fn format_distance<T: Display>(dist: Option<T>) -> String {
    match dist {
        Some(d) => d.to_string(),
        None => "-1".to_string(),
    }
}

/// Render a node sequence as `a -> b -> c`
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a node list separated by spaces
pub fn format_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
