//! Configuration for graphkit
//!
//! An optional TOML file named by `--config` or `GRAPHKIT_CONFIG`. Every
//! field has a default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::graph::WeightedOptions;

pub use types::{Config, OutputConfig, QueueConfig};

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            rebuild_factor = config.queue.rebuild_factor,
            "config_loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the algorithms cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.queue.rebuild_factor < 2 {
            crate::bail_invalid!("queue.rebuild_factor (must be >= 2)", self.queue.rebuild_factor);
        }
        Ok(())
    }

    /// Options for Dijkstra and Prim derived from this configuration
    pub fn weighted_options(&self) -> WeightedOptions {
        WeightedOptions {
            queue_rebuild_factor: self.queue.rebuild_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::format::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.queue.rebuild_factor, 2);
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::from_toml_str(
            r#"
[queue]
rebuild_factor = 4

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.queue.rebuild_factor, 4);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.weighted_options().queue_rebuild_factor, 4);
    }

    #[test]
    fn test_rebuild_factor_below_two_rejected() {
        let err = Config::from_toml_str("[queue]\nrebuild_factor = 1\n").unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::from_toml_str("[output]\nformat = \"records\"\n").unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[queue]\nrebuild_factor = 3").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.queue.rebuild_factor, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/graphkit.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
