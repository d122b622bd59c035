//! Application layer for orchestrating line processing
//!
//! This module provides the coordination layer between the pure domain logic
//! and the public API, handling chunking, thread pool management and
//! timing.
//!
//! # Architecture
//!
//! The application layer orchestrates domain operations without containing
//! counting logic itself. It handles:
//!
//! - Partitioning a line sequence into fixed-size chunks
//! - Thread pool management and parallel execution
//! - Merging per-chunk records
//! - Timing and processing metrics
//!
//! # Example
//!
//! ```rust
//! use textstat_core::application::{ChunkedProcessor, SequentialProcessor};
//!
//! let lines = ["first paragraph", "", "second", "paragraph"];
//!
//! let sequential = SequentialProcessor::new().process(&lines);
//! let chunked = ChunkedProcessor::new().unwrap().process(&lines, 3).unwrap();
//!
//! assert_eq!(sequential.word_count, chunked.word_count);
//! ```

pub mod chunked;
pub mod chunking;
pub mod config;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

pub use chunked::ChunkedProcessor;
pub use chunking::{ChunkManager, LineChunk};
pub use config::{ProcessingError, ProcessingMetrics, ProcessingResult, ProcessorConfig};
#[cfg(feature = "parallel")]
pub use config::ThreadPoolConfig;
#[cfg(feature = "parallel")]
pub use parallel::ParallelProcessor;
pub use sequential::SequentialProcessor;
