//! Configuration file support
//!
//! The `analyze` command reads an optional TOML file. Command-line flags take
//! precedence over values found there.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textstat_core::api::defaults;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lines per chunk for the chunked analyzer
    pub chunk_size: usize,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            threads: 0,
        }
    }
}

impl AnalysisConfig {
    /// Thread limit in the form the core config expects
    pub fn thread_limit(&self) -> Option<usize> {
        (self.threads > 0).then_some(self.threads)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.analysis.chunk_size == 0 {
            return Err(
                CliError::ConfigError("chunk_size must be greater than 0".to_string()).into(),
            );
        }

        Ok(config)
    }

    /// Commented template with the default values
    pub fn template() -> String {
        format!(
            r#"# textstat configuration

[analysis]
# Lines per chunk for the chunked analyzer. Paragraphs that cross a chunk
# boundary are counted once per chunk they touch.
chunk_size = {chunk_size}

# Number of worker threads (0 = one per CPU)
threads = 0

[output]
# One of: text, json, markdown
format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            chunk_size = defaults::CHUNK_SIZE
        )
    }
}
