//! Chunked processing: partition, scan each chunk in isolation, merge
//!
//! Paragraph state resets at the start of every chunk. A paragraph that
//! straddles a chunk boundary is therefore counted once per chunk it touches,
//! while every other counter matches the sequential pass exactly.

use crate::application::{
    chunking::ChunkManager,
    config::{ProcessingMetrics, ProcessingResult, ProcessorConfig},
};
use crate::domain::StatisticsRecord;
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::application::{config::ThreadPoolConfig, parallel::ParallelProcessor};

/// Fork-join processor over fixed-size line chunks
#[derive(Debug)]
pub struct ChunkedProcessor {
    /// Default lines per chunk, from the processor config
    chunk_size: usize,

    #[cfg(feature = "parallel")]
    parallel: ParallelProcessor,
}

impl ChunkedProcessor {
    /// Creates a processor with one worker per logical CPU
    pub fn new() -> ProcessingResult<Self> {
        Self::with_config(&ProcessorConfig::default())
    }

    /// Creates a processor sized by `config.max_threads`
    pub fn with_config(config: &ProcessorConfig) -> ProcessingResult<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        {
            let pool_config = ThreadPoolConfig {
                num_threads: config.thread_count(),
                ..Default::default()
            };
            Ok(Self {
                chunk_size: config.chunk_size,
                parallel: ParallelProcessor::with_config(pool_config)?,
            })
        }

        #[cfg(not(feature = "parallel"))]
        {
            Ok(Self {
                chunk_size: config.chunk_size,
            })
        }
    }

    /// Lines per chunk used when no explicit size is given
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of worker threads chunks are dispatched to
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.parallel.thread_count()
        }

        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Partitions `lines` into chunks of `chunk_size` and merges their records
    ///
    /// A zero `chunk_size` is rejected before any partitioning happens.
    pub fn process<L>(&self, lines: &[L], chunk_size: usize) -> ProcessingResult<StatisticsRecord>
    where
        L: AsRef<str> + Sync,
    {
        self.process_with_metrics(lines, chunk_size)
            .map(|(stats, _)| stats)
    }

    /// Same as [`process`](Self::process), also reporting chunk and timing metrics
    pub fn process_with_metrics<L>(
        &self,
        lines: &[L],
        chunk_size: usize,
    ) -> ProcessingResult<(StatisticsRecord, ProcessingMetrics)>
    where
        L: AsRef<str> + Sync,
    {
        let chunk_manager = ChunkManager::new(chunk_size)?;

        let start = Instant::now();
        let chunks = chunk_manager.chunk_lines(lines);
        log::debug!(
            "partitioned {} lines into {} chunks of up to {} lines",
            lines.len(),
            chunks.len(),
            chunk_size
        );

        #[cfg(feature = "parallel")]
        let stats = self.parallel.process_chunks(&chunks);

        #[cfg(not(feature = "parallel"))]
        let stats: StatisticsRecord = chunks
            .iter()
            .map(|chunk| crate::domain::scan_lines(chunk.lines))
            .sum();

        let metrics = ProcessingMetrics {
            elapsed: start.elapsed(),
            chunk_count: chunks.len(),
            thread_count: self.thread_count(),
            lines_processed: lines.len(),
        };
        log::trace!(
            "chunked pass: {} chunks on {} threads in {:?}",
            metrics.chunk_count,
            metrics.thread_count,
            metrics.elapsed
        );

        Ok((stats, metrics))
    }
}
