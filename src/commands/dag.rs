//! `graphkit toposort`, `cycle` and `hamiltonian` commands

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::output::{format_nodes, format_path, print_json};
use graphkit_core::error::Result;
use graphkit_core::graph::{find_cycle, hamiltonian_path_dag, topological_sort, Graph};

/// Execute the toposort command
///
/// A cycle is reported, not treated as an error.
pub fn execute_toposort(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    let sorted = topological_sort(graph);

    match ctx.format {
        OutputFormat::Json => print_json(&json!({
            "is_dag": sorted.is_complete(),
            "order": sorted.order,
            "blocked": sorted.blocked,
        }))?,
        OutputFormat::Human => {
            println!("order: {}", format_nodes(&sorted.order));
            if !sorted.is_complete() {
                println!("blocked: {}", format_nodes(&sorted.blocked));
                if !ctx.quiet() {
                    println!("graph has a cycle; order covers only the acyclic prefix");
                }
            }
        }
    }

    Ok(())
}

/// Execute the cycle command
pub fn execute_cycle(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    let cycle = find_cycle(graph);

    match ctx.format {
        OutputFormat::Json => print_json(&json!({ "cycle": cycle }))?,
        OutputFormat::Human => match cycle {
            Some(mut nodes) => {
                if let Some(&first) = nodes.first() {
                    nodes.push(first);
                }
                println!("cycle: {}", format_path(&nodes));
            }
            None => println!("no cycle"),
        },
    }

    Ok(())
}

/// Execute the hamiltonian command
pub fn execute_hamiltonian(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    let path = hamiltonian_path_dag(graph);

    match ctx.format {
        OutputFormat::Json => print_json(&json!({ "path": path }))?,
        OutputFormat::Human => match path {
            Some(nodes) => println!("path: {}", format_path(&nodes)),
            None => println!("no hamiltonian path"),
        },
    }

    Ok(())
}
