//! `graphkit shortest-path` and `graphkit mst` commands

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{format_distance, format_path, print_json};
use graphkit_core::ensure_node;
use graphkit_core::error::Result;
use graphkit_core::graph::{dijkstra, prim, EdgeWeights, Graph, NodeId};

/// Execute the shortest-path command
///
/// Without a target every distance is listed; with one, only the path to it
/// and its cost. An unreachable target is reported, not an error.
pub fn execute_shortest_path(
    ctx: &CommandContext,
    graph: &Graph,
    weights: &EdgeWeights,
    source: NodeId,
    target: Option<NodeId>,
) -> Result<()> {
    if let Some(target) = target {
        ensure_node!(target, graph.node_count());
    }
    let paths = dijkstra(graph, weights, source, &ctx.weighted_options())?;

    let Some(target) = target else {
        match ctx.format {
            OutputFormat::Json => print_json(&json!({
                "source": paths.source,
                "dist": paths.dist,
                "pred": paths.pred,
            }))?,
            OutputFormat::Human => {
                if !ctx.quiet() {
                    println!("shortest paths from {}", source);
                }
                for (node, dist) in paths.dist.iter().enumerate() {
                    println!("  {}: {}", node, format_distance(*dist));
                }
            }
        }
        return Ok(());
    };

    let path = paths.path_to(target);
    let cost = paths.distance_to(target);
    match ctx.format {
        OutputFormat::Json => print_json(&json!({
            "source": source,
            "target": target,
            "path": path,
            "cost": cost,
        }))?,
        OutputFormat::Human => match (path, cost) {
            (Some(nodes), Some(cost)) => {
                println!("path: {}", format_path(&nodes));
                println!("cost: {}", cost);
            }
            _ => println!("no path from {} to {}", source, target),
        },
    }

    Ok(())
}

/// Execute the mst command
pub fn execute_mst(
    ctx: &CommandContext,
    graph: &Graph,
    weights: &EdgeWeights,
    root: NodeId,
) -> Result<()> {
    let mst = prim(graph, weights, root, &ctx.weighted_options())?;
    let edges = mst.edges();

    match ctx.format {
        OutputFormat::Json => {
            let edges: Vec<_> = edges
                .iter()
                .map(|&(from, to)| {
                    json!({
                        "from": from,
                        "to": to,
                        "weight": weights.get(from, to),
                    })
                })
                .collect();
            print_json(&json!({
                "root": mst.root,
                "edges": edges,
                "total_weight": mst.total_weight,
            }))?;
        }
        OutputFormat::Human => {
            if !ctx.quiet() {
                println!(
                    "spanning tree from {}: {} edges",
                    root,
                    mst.tree.edge_count()
                );
            }
            for (from, to) in edges {
                println!(
                    "  {} - {} ({})",
                    from,
                    to,
                    format_distance(weights.get(from, to))
                );
            }
            println!("total weight: {}", mst.total_weight);
        }
    }

    Ok(())
}
