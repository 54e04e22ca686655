//! `graphkit show` command - adjacency lists and degrees

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::print_json;
use graphkit_core::error::Result;
use graphkit_core::graph::{is_connected, Graph};

/// Execute the show command
pub fn execute(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let mut degrees = Vec::with_capacity(graph.node_count());
            for node in graph.nodes() {
                degrees.push(json!({
                    "node": node,
                    "in": graph.in_degree(node)?,
                    "out": graph.out_degree(node)?,
                    "degree": graph.degree(node)?,
                }));
            }

            print_json(&json!({
                "nodes": graph.node_count(),
                "directed": graph.is_directed(),
                "edge_count": graph.edge_count(),
                "connected": is_connected(graph),
                "edges": graph.edges(),
                "degrees": degrees,
            }))?;
        }
        OutputFormat::Human => {
            if !ctx.quiet() {
                println!(
                    "{} nodes, {} edges ({})",
                    graph.node_count(),
                    graph.edge_count(),
                    if graph.is_directed() {
                        "directed"
                    } else {
                        "undirected"
                    }
                );
            }
            if graph.node_count() > 0 {
                println!("{}", graph);
            }
            if ctx.quiet() {
                return Ok(());
            }

            println!();
            println!("degrees:");
            for node in graph.nodes() {
                if graph.is_directed() {
                    println!(
                        "  {}: in={} out={}",
                        node,
                        graph.in_degree(node)?,
                        graph.out_degree(node)?
                    );
                } else {
                    println!("  {}: {}", node, graph.degree(node)?);
                }
            }
        }
    }

    Ok(())
}
