//! Configuration API for text analysis

use crate::api::Error;
use crate::application::ProcessorConfig;

/// Default configuration constants
pub mod defaults {
    /// Default chunk size in lines
    pub const CHUNK_SIZE: usize = 10;
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) chunk_size: usize,      // in lines
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Lines per chunk used by the chunked analyzer
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Worker thread limit (None = all available)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfiguration(
                "chunk_size must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::InvalidConfiguration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }

    /// Convert to the application-layer processor config
    pub(crate) fn to_processor_config(&self) -> ProcessorConfig {
        ProcessorConfig {
            chunk_size: self.chunk_size,
            max_threads: self.threads,
        }
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    chunk_size: Option<usize>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size in lines
    pub fn chunk_size(mut self, lines: usize) -> Self {
        self.chunk_size = Some(lines);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
