//! Shared context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use graphkit_core::config::Config;
use graphkit_core::error::Result;
use graphkit_core::graph::{EdgeWeights, Graph, WeightedOptions};
use graphkit_core::input::GraphFile;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn weighted_options(&self) -> WeightedOptions {
        self.config.weighted_options()
    }

    /// Read and build the graph named by `args`
    pub fn load_graph(&self, args: &GraphArgs) -> Result<(Graph, EdgeWeights)> {
        let file = GraphFile::load(&args.file)?;
        let built = file.build()?;
        trace_command!(self, "load_graph");
        Ok(built)
    }
}
