//! Configuration type definitions

use crate::format::OutputFormat;
use crate::queue::DEFAULT_REBUILD_FACTOR;
use serde::{Deserialize, Serialize};

/// graphkit configuration, read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Priority queue tuning
    #[serde(default)]
    pub queue: QueueConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the updatable priority queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Rebuild the heap once it holds this many times the live item count
    #[serde(default = "default_rebuild_factor")]
    pub rebuild_factor: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            rebuild_factor: default_rebuild_factor(),
        }
    }
}

/// Configuration for command output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_rebuild_factor() -> usize {
    DEFAULT_REBUILD_FACTOR
}
