//! Configuration module

use anyhow::{Context, Result};
use osc_text_core::{OrderTable, SentencizerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Sentence splitting configuration
    #[serde(default)]
    pub sentencizer: SentencizerConfig,

    /// Annotation reordering configuration
    #[serde(default)]
    pub reorder: ReorderConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Reorder-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReorderConfig {
    /// Order table code (`zh-tn`, `zh-itn`, `en-tn`)
    pub table: String,

    /// Pass malformed lines through unchanged instead of failing
    pub skip_invalid: bool,

    /// Number of worker threads for parallel runs (0 = auto)
    pub worker_threads: usize,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            table: OrderTable::default().code().to_string(),
            skip_invalid: false,
            worker_threads: 0,
        }
    }
}

impl ReorderConfig {
    /// Resolve the configured table code
    pub fn order_table(&self) -> Result<OrderTable> {
        self.table
            .parse::<OrderTable>()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Read size for streaming input (KB)
    pub chunk_size_kb: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            chunk_size_kb: 8,
        }
    }
}

impl CliConfig {
    /// Parse a TOML document without validating it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.sentencizer
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        self.reorder.order_table()?;
        if !matches!(
            self.output.default_format.as_str(),
            "text" | "json" | "markdown"
        ) {
            return Err(CliError::ConfigError(format!(
                "unknown output format: {}",
                self.output.default_format
            ))
            .into());
        }
        if self.output.chunk_size_kb == 0 {
            return Err(CliError::ConfigError("chunk_size_kb must be positive".into()).into());
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
