//! Subcommand argument structures

use clap::Args;
use std::path::PathBuf;

use crate::cli::parse::parse_node_count;
use graphkit_core::graph::NodeId;

/// A graph file argument, shared by every command that reads one.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph file (JSON, or TOML with a .toml extension)
    pub file: PathBuf,
}

/// Arguments for bfs and dfs.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node
    #[arg(long, short)]
    pub source: NodeId,
}

/// Arguments for the shortest-path command.
#[derive(Args, Debug)]
pub struct ShortestPathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node
    #[arg(long, short)]
    pub source: NodeId,

    /// Report only the path to this node and its cost
    #[arg(long, short)]
    pub target: Option<NodeId>,
}

/// Arguments for the mst command.
#[derive(Args, Debug)]
pub struct MstArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Node the tree is grown from
    #[arg(long, short, default_value_t = 0)]
    pub root: NodeId,
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of nodes (at least 1)
    #[arg(long, short, value_parser = parse_node_count)]
    pub nodes: usize,

    /// Generate a directed graph
    #[arg(long)]
    pub directed: bool,

    /// Only add edges from lower to higher ids (implies --directed)
    #[arg(long)]
    pub dag: bool,

    /// Attach integer weights to every edge
    #[arg(long)]
    pub weighted: bool,

    /// Seed for a reproducible graph
    #[arg(long)]
    pub seed: Option<u64>,
}
