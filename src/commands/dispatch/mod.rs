//! Command dispatch logic for graphkit

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use graphkit_core::config::Config;
use graphkit_core::error::Result;

mod command;
mod macros;

pub use command::CommandContext;
pub(crate) use macros::trace_command;

/// Load the configuration named by `--config` / `GRAPHKIT_CONFIG`, or the
/// defaults when none is given
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    let result = match &cli.command {
        Commands::Show(args) => {
            let (graph, _) = ctx.load_graph(args)?;
            commands::show::execute(&ctx, &graph)
        }
        Commands::Bfs(args) => {
            let (graph, _) = ctx.load_graph(&args.graph)?;
            commands::traverse::execute_bfs(&ctx, &graph, args.source)
        }
        Commands::Dfs(args) => {
            let (graph, _) = ctx.load_graph(&args.graph)?;
            commands::traverse::execute_dfs(&ctx, &graph, args.source)
        }
        Commands::Toposort(args) => {
            let (graph, _) = ctx.load_graph(args)?;
            commands::dag::execute_toposort(&ctx, &graph)
        }
        Commands::Cycle(args) => {
            let (graph, _) = ctx.load_graph(args)?;
            commands::dag::execute_cycle(&ctx, &graph)
        }
        Commands::Hamiltonian(args) => {
            let (graph, _) = ctx.load_graph(args)?;
            commands::dag::execute_hamiltonian(&ctx, &graph)
        }
        Commands::ShortestPath(args) => {
            let (graph, weights) = ctx.load_graph(&args.graph)?;
            commands::weighted::execute_shortest_path(
                &ctx,
                &graph,
                &weights,
                args.source,
                args.target,
            )
        }
        Commands::Mst(args) => {
            let (graph, weights) = ctx.load_graph(&args.graph)?;
            commands::weighted::execute_mst(&ctx, &graph, &weights, args.root)
        }
        Commands::Generate(args) => commands::generate::execute(&ctx, args),
    };

    trace_command!(ctx, "execute_command");
    result
}
