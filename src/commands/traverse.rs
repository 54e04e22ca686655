//! `graphkit bfs` and `graphkit dfs` commands

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{format_distance, format_nodes, print_json};
use graphkit_core::error::Result;
use graphkit_core::graph::{bfs, dfs, Graph, NodeId};

fn print_tree_edges(edges: &[(NodeId, NodeId)]) {
    println!("tree edges:");
    for (parent, child) in edges {
        println!("  {} -> {}", parent, child);
    }
}

/// Execute the bfs command
pub fn execute_bfs(ctx: &CommandContext, graph: &Graph, source: NodeId) -> Result<()> {
    let result = bfs(graph, source)?;
    let tree_edges = result.tree.edges();

    match ctx.format {
        OutputFormat::Json => print_json(&json!({
            "source": result.source,
            "reached": result.reached(),
            "tree_edges": tree_edges,
            "dist": result.dist,
        }))?,
        OutputFormat::Human => {
            if !ctx.quiet() {
                println!(
                    "bfs from {}: reached {} of {} nodes",
                    source,
                    result.reached().len(),
                    graph.node_count()
                );
            }
            print_tree_edges(&tree_edges);
            println!("distances:");
            for (node, dist) in result.dist.iter().enumerate() {
                println!("  {}: {}", node, format_distance(*dist));
            }
        }
    }

    Ok(())
}

/// Execute the dfs command
pub fn execute_dfs(ctx: &CommandContext, graph: &Graph, source: NodeId) -> Result<()> {
    let result = dfs(graph, source)?;
    let tree_edges = result.tree.edges();

    match ctx.format {
        OutputFormat::Json => print_json(&json!({
            "source": result.source,
            "order": result.order,
            "tree_edges": tree_edges,
        }))?,
        OutputFormat::Human => {
            if !ctx.quiet() {
                println!(
                    "dfs from {}: reached {} of {} nodes",
                    source,
                    result.order.len(),
                    graph.node_count()
                );
            }
            println!("order: {}", format_nodes(&result.order));
            print_tree_edges(&tree_edges);
        }
    }

    Ok(())
}
