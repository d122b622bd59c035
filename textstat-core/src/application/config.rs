//! Configuration and error handling for the application layer
//!
//! This module provides configuration options for chunked processing
//! and the error types raised before or during it.

use std::time::Duration;
use thiserror::Error;

/// Configuration options for chunked line processing
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Number of lines in each chunk
    pub chunk_size: usize,

    /// Maximum number of threads to use (None = use all available)
    pub max_threads: Option<usize>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            chunk_size: 10,    // 10 lines per chunk
            max_threads: None, // Use all available cores
        }
    }
}

impl ProcessorConfig {
    /// Creates a new builder for ProcessorConfig
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ProcessingError> {
        if self.chunk_size == 0 {
            return Err(ProcessingError::InvalidConfig {
                reason: "Chunk size must be greater than 0".to_string(),
            });
        }

        if let Some(threads) = self.max_threads {
            if threads == 0 {
                return Err(ProcessingError::InvalidConfig {
                    reason: "Max threads must be greater than 0".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Thread count this configuration resolves to
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.max_threads.unwrap_or_else(num_cpus::get)
        }

        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}

/// Errors that can occur during line processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Invalid configuration parameters
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Error during parallel processing
    #[error("Parallel processing failed")]
    ParallelError {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for processing operations
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Builder for ProcessorConfig with fluent API
#[derive(Debug, Clone)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::default(),
        }
    }

    /// Sets the chunk size in lines
    pub fn chunk_size(mut self, lines: usize) -> Self {
        self.config.chunk_size = lines;
        self
    }

    /// Sets the maximum number of threads
    pub fn max_threads(mut self, threads: Option<usize>) -> Self {
        self.config.max_threads = threads;
        self
    }

    /// Builds the configuration, validating parameters
    pub fn build(self) -> ProcessingResult<ProcessorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

}

impl Default for ProcessorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics collected during one processing pass
#[derive(Debug, Clone, Default)]
pub struct ProcessingMetrics {
    /// Wall-clock time of the pass
    pub elapsed: Duration,

    /// Number of chunks processed
    pub chunk_count: usize,

    /// Number of threads available to the pass
    pub thread_count: usize,

    /// Total lines processed
    pub lines_processed: usize,
}

/// Thread pool configuration
#[cfg(feature = "parallel")]
#[derive(Debug, Clone)]
pub struct ThreadPoolConfig {
    /// Number of worker threads
    pub num_threads: usize,

    /// Stack size for worker threads (in bytes)
    pub stack_size: Option<usize>,

    /// Thread name prefix
    pub thread_name_prefix: String,
}

#[cfg(feature = "parallel")]
impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            stack_size: None,
            thread_name_prefix: "textstat-worker".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.chunk_size, 10);
        assert_eq!(config.max_threads, None);
        assert!(config.validate().is_ok());
        assert!(config.thread_count() >= 1);
    }

    #[test]
    fn test_config_validation() {
        // Invalid chunk size
        let config = ProcessorConfig {
            chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ProcessingError::InvalidConfig { .. })
        ));

        // Invalid thread count
        let config = ProcessorConfig {
            max_threads: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = ProcessorConfig::builder()
            .chunk_size(3)
            .max_threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.chunk_size, 3);
        assert_eq!(config.max_threads, Some(2));

        assert!(ProcessorConfig::builder().chunk_size(0).build().is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_explicit_thread_count() {
        let config = ProcessorConfig {
            max_threads: Some(3),
            ..Default::default()
        };
        assert_eq!(config.thread_count(), 3);
    }
}
