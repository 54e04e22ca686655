//! CLI argument parsing for graphkit
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GenerateArgs, GraphArgs, MstArgs, ShortestPathArgs, TraverseArgs};
pub use graphkit_core::format::OutputFormat;

/// graphkit - graph algorithms over graph files
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else human]
    #[arg(long, global = true, value_parser = parse::parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "graphkit_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency lists and node degrees
    Show(GraphArgs),

    /// Breadth-first tree and hop distances from a source node
    Bfs(TraverseArgs),

    /// Depth-first tree and discovery order from a source node
    Dfs(TraverseArgs),

    /// Topological order, or the nodes blocked by a cycle
    Toposort(GraphArgs),

    /// Find an explicit cycle
    Cycle(GraphArgs),

    /// Hamiltonian path of a DAG
    Hamiltonian(GraphArgs),

    /// Dijkstra shortest paths from a source node
    ShortestPath(ShortestPathArgs),

    /// Prim minimum spanning tree from a root node
    Mst(MstArgs),

    /// Write a random graph file to stdout
    Generate(GenerateArgs),
}
