//! Configuration loading
//!
//! Loads the daemon configuration from a TOML file, or from the copy of
//! `pisugar3.toml` compiled into the binary when no path is given.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use pisugar_core::config::PluginConfig;
use serde::Deserialize;

/// Embedded default configuration
pub const EMBEDDED_CONFIG: &str = include_str!("../../pisugar3.toml");

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing failed
    #[error("invalid TOML")]
    Parse(#[from] toml::de::Error),
    /// Parsed, but a value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Everything the daemon needs to run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Options handed to the battery plugin
    pub plugin: PluginConfig,
    /// Time between UI refreshes (ms)
    pub refresh_interval_ms: u64,
    /// Program and arguments run to power off
    pub shutdown_command: Vec<String>,
    /// Log the shutdown command instead of running it
    pub dry_run: bool,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            plugin: PluginConfig::default(),
            refresh_interval_ms: 1000,
            shutdown_command: vec!["shutdown".into(), "-h".into(), "now".into()],
            dry_run: false,
        }
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<DaemonConfig, ConfigError> {
    let config: DaemonConfig = toml::from_str(input)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DaemonConfig) -> Result<(), ConfigError> {
    if config.refresh_interval_ms == 0 {
        return Err(ConfigError::Invalid("refresh_interval_ms must be positive"));
    }
    if config.shutdown_command.is_empty() {
        return Err(ConfigError::Invalid("shutdown_command must name a program"));
    }
    if config.plugin.shutdown.is_some_and(|t| t > 100) {
        return Err(ConfigError::Invalid("plugin.shutdown must be a percentage"));
    }
    Ok(())
}

/// Load from `path`, or from the embedded defaults when `None`
pub fn load_config(path: Option<&Path>) -> Result<DaemonConfig, ConfigError> {
    let Some(path) = path else {
        info!("Using embedded default configuration");
        return parse_config(EMBEDDED_CONFIG);
    };

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
