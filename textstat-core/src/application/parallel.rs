//! Parallel processing coordination
//!
//! This module runs per-chunk scans on a rayon thread pool and folds the
//! partial records with a tree reduction.

use crate::application::{
    chunking::LineChunk,
    config::{ProcessingError, ProcessingResult, ThreadPoolConfig},
};
use crate::domain::{scan_lines, Monoid, StatisticsRecord};
use rayon::prelude::*;
use std::sync::Arc;

/// Manages parallel execution of chunk scans
#[derive(Debug)]
pub struct ParallelProcessor {
    /// Thread pool for parallel execution
    thread_pool: Arc<rayon::ThreadPool>,

    /// Minimum chunk count to justify parallel processing
    min_chunks_for_parallel: usize,
}

impl ParallelProcessor {
    /// Creates a new parallel processor with default configuration
    pub fn new() -> ProcessingResult<Self> {
        Self::with_config(ThreadPoolConfig::default())
    }

    /// Creates a new parallel processor with custom configuration
    pub fn with_config(config: ThreadPoolConfig) -> ProcessingResult<Self> {
        let prefix = config.thread_name_prefix;
        let mut pool_builder = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .thread_name(move |i| format!("{prefix}-{i}"));

        if let Some(stack_size) = config.stack_size {
            pool_builder = pool_builder.stack_size(stack_size);
        }

        let thread_pool = pool_builder
            .build()
            .map_err(|e| ProcessingError::ParallelError {
                source: Box::new(e),
            })?;

        log::debug!(
            "built thread pool with {} threads",
            thread_pool.current_num_threads()
        );

        Ok(Self {
            thread_pool: Arc::new(thread_pool),
            min_chunks_for_parallel: 2,
        })
    }

    /// Scans every chunk in isolation and merges the partial records
    ///
    /// Each chunk starts with an empty record and a fresh paragraph state.
    /// Returns only after every chunk has been scanned.
    pub fn process_chunks<L>(&self, chunks: &[LineChunk<'_, L>]) -> StatisticsRecord
    where
        L: AsRef<str> + Sync,
    {
        if chunks.len() < self.min_chunks_for_parallel {
            // Fall back to sequential processing for small chunk counts
            return self.process_chunks_sequential(chunks);
        }

        self.thread_pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| scan_lines(chunk.lines))
                .reduce(StatisticsRecord::identity, |a, b| a.combine(&b))
        })
    }

    /// Sequential fallback for small chunk counts
    fn process_chunks_sequential<L: AsRef<str>>(
        &self,
        chunks: &[LineChunk<'_, L>],
    ) -> StatisticsRecord {
        chunks.iter().map(|chunk| scan_lines(chunk.lines)).sum()
    }

    /// Returns the number of threads in the pool
    pub fn thread_count(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}
