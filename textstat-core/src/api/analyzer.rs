//! Main text analyzer implementation

use crate::api::{Analysis, AnalysisMode, Comparison, Config, Error, Input};
use crate::application::{ChunkedProcessor, SequentialProcessor};

/// Runs the sequential and chunked analyzers over line sequences
///
/// Owns the worker pool used by the chunked analyzer, so one analyzer should
/// be reused across documents.
#[derive(Debug)]
pub struct TextAnalyzer {
    sequential: SequentialProcessor,
    chunked: ChunkedProcessor,
    config: Config,
}

impl TextAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let chunked = ChunkedProcessor::with_config(&config.to_processor_config())?;

        Ok(Self {
            sequential: SequentialProcessor::new(),
            chunked,
            config,
        })
    }

    /// Single pass over all lines with one paragraph state
    pub fn analyze_sequential<L: AsRef<str>>(&self, lines: &[L]) -> Analysis {
        let (stats, metrics) = self.sequential.process_with_metrics(lines);
        Analysis::from_metrics(stats, metrics, AnalysisMode::Sequential)
    }

    /// Chunked parallel pass with an explicit chunk size
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `chunk_size` is zero.
    pub fn analyze_concurrent<L>(&self, lines: &[L], chunk_size: usize) -> Result<Analysis, Error>
    where
        L: AsRef<str> + Sync,
    {
        let (stats, metrics) = self.chunked.process_with_metrics(lines, chunk_size)?;
        Ok(Analysis::from_metrics(stats, metrics, AnalysisMode::Chunked))
    }

    /// Chunked parallel pass with the configured chunk size
    pub fn analyze_chunked<L>(&self, lines: &[L]) -> Result<Analysis, Error>
    where
        L: AsRef<str> + Sync,
    {
        self.analyze_concurrent(lines, self.chunked.chunk_size())
    }

    /// Run both analyzers over already split lines
    pub fn compare_lines<L>(&self, lines: &[L]) -> Result<Comparison, Error>
    where
        L: AsRef<str> + Sync,
    {
        let sequential = self.analyze_sequential(lines);
        let concurrent = self.analyze_chunked(lines)?;

        log::debug!(
            "sequential {:?}, chunked {:?} over {} chunks",
            sequential.elapsed,
            concurrent.elapsed,
            concurrent.chunks_processed
        );

        Ok(Comparison {
            sequential,
            concurrent,
            chunk_size: self.config.chunk_size,
        })
    }

    /// Split the input into lines and run both analyzers over it
    pub fn compare(&self, input: Input) -> Result<Comparison, Error> {
        log::debug!("reading input {:?}", input);
        let lines = input.into_lines()?;
        self.compare_lines(&lines)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Worker threads available to the chunked analyzer
    pub fn thread_count(&self) -> usize {
        self.chunked.thread_count()
    }
}

/// Sequential analysis without a configured analyzer
pub fn analyze_sequential<L: AsRef<str>>(lines: &[L]) -> Analysis {
    let (stats, metrics) = SequentialProcessor::new().process_with_metrics(lines);
    Analysis::from_metrics(stats, metrics, AnalysisMode::Sequential)
}

/// Chunked analysis without a configured analyzer
///
/// Builds a worker pool for the call; reuse a [`TextAnalyzer`] when
/// analyzing many documents.
pub fn analyze_concurrent<L>(lines: &[L], chunk_size: usize) -> Result<Analysis, Error>
where
    L: AsRef<str> + Sync,
{
    let config = Config::builder().chunk_size(chunk_size).build()?;
    TextAnalyzer::with_config(config)?.analyze_chunked(lines)
}
