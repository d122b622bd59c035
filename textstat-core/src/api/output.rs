//! Output types for the analysis API

use crate::application::ProcessingMetrics;
use crate::domain::StatisticsRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which analyzer produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Single pass over the whole document
    Sequential,
    /// Fixed-size chunks scanned in parallel and merged
    Chunked,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisMode::Sequential => write!(f, "sequential"),
            AnalysisMode::Chunked => write!(f, "chunked"),
        }
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The merged counters
    pub stats: StatisticsRecord,
    /// Wall-clock time of the pass
    pub elapsed: Duration,
    /// Analyzer that produced the result
    pub mode: AnalysisMode,
    /// Number of chunks processed
    pub chunks_processed: usize,
    /// Worker threads available to the pass
    pub threads_used: usize,
}

impl Analysis {
    pub(crate) fn from_metrics(
        stats: StatisticsRecord,
        metrics: ProcessingMetrics,
        mode: AnalysisMode,
    ) -> Self {
        Self {
            stats,
            elapsed: metrics.elapsed,
            mode,
            chunks_processed: metrics.chunk_count,
            threads_used: metrics.thread_count,
        }
    }

    /// Elapsed time in whole microseconds
    pub fn elapsed_micros(&self) -> u64 {
        duration_micros(self.elapsed)
    }

    /// Split into the record and the elapsed time
    pub fn into_parts(self) -> (StatisticsRecord, Duration) {
        (self.stats, self.elapsed)
    }
}

/// Both analyzers run over the same document
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Single-pass reference result
    pub sequential: Analysis,
    /// Chunked parallel result
    pub concurrent: Analysis,
    /// Chunk size the concurrent pass used
    pub chunk_size: usize,
}

impl Comparison {
    /// Extra paragraphs the chunked pass counted at chunk boundaries
    pub fn paragraph_divergence(&self) -> usize {
        self.concurrent
            .stats
            .paragraph_count
            .saturating_sub(self.sequential.stats.paragraph_count)
    }

    /// True when every counter except paragraphs matches
    pub fn counters_agree(&self) -> bool {
        self.sequential
            .stats
            .agrees_ignoring_paragraphs(&self.concurrent.stats)
    }

    /// Sequential time divided by concurrent time
    ///
    /// Returns `None` when the concurrent pass took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        let concurrent = self.concurrent.elapsed.as_secs_f64();
        if concurrent == 0.0 {
            return None;
        }

        Some(self.sequential.elapsed.as_secs_f64() / concurrent)
    }

    /// Serializable view of the comparison
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            sequential_result: self.sequential.stats,
            sequential_time_microseconds: self.sequential.elapsed_micros(),
            concurrent_result: self.concurrent.stats,
            concurrent_time_microseconds: self.concurrent.elapsed_micros(),
            chunk_size: self.chunk_size,
            chunks_processed: self.concurrent.chunks_processed,
            threads_used: self.concurrent.threads_used,
        }
    }
}

/// Flat, serializable form of a [`Comparison`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Counters from the sequential pass
    pub sequential_result: StatisticsRecord,
    /// Sequential pass duration
    pub sequential_time_microseconds: u64,
    /// Counters from the chunked pass
    pub concurrent_result: StatisticsRecord,
    /// Chunked pass duration
    pub concurrent_time_microseconds: u64,
    /// Lines per chunk
    pub chunk_size: usize,
    /// Number of chunks the document was split into
    pub chunks_processed: usize,
    /// Worker threads available to the chunked pass
    pub threads_used: usize,
}

fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
