//! Sequential single-pass processing

use crate::application::config::ProcessingMetrics;
use crate::domain::{LineScanner, StatisticsRecord};
use std::time::Instant;

/// Single-threaded processor over the whole line sequence
///
/// Paragraph state is tracked across the entire document without any
/// discontinuity, which makes this the reference result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialProcessor;

impl SequentialProcessor {
    /// Create a new sequential processor
    pub fn new() -> Self {
        Self
    }

    /// Scan every line in order as one unit
    pub fn process<L: AsRef<str>>(&self, lines: &[L]) -> StatisticsRecord {
        let mut scanner = LineScanner::new();
        scanner.scan(lines);
        scanner.finish()
    }

    /// Scan every line and report timing alongside the record
    pub fn process_with_metrics<L: AsRef<str>>(
        &self,
        lines: &[L],
    ) -> (StatisticsRecord, ProcessingMetrics) {
        let start = Instant::now();
        let stats = self.process(lines);

        let metrics = ProcessingMetrics {
            elapsed: start.elapsed(),
            chunk_count: usize::from(!lines.is_empty()),
            thread_count: 1,
            lines_processed: lines.len(),
        };
        log::trace!(
            "sequential pass: {} lines in {:?}",
            metrics.lines_processed,
            metrics.elapsed
        );

        (stats, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture() {
        let stats = SequentialProcessor::new().process(&["Hello world", "", "Foo 2 bar"]);

        assert_eq!(
            stats,
            StatisticsRecord {
                paragraph_count: 2,
                line_count: 3,
                word_count: 5,
                char_count: 20,
                alpha_count: 16,
                digit_count: 1,
                vowel_count: 6,
                non_vowel_count: 10,
            }
        );
    }

    #[test]
    fn test_paragraph_continuity_across_document() {
        let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let stats = SequentialProcessor::new().process(&lines);

        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.line_count, 50);
    }

    #[test]
    fn test_metrics() {
        let (stats, metrics) = SequentialProcessor::new().process_with_metrics(&["a", "b"]);
        assert_eq!(stats.line_count, 2);
        assert_eq!(metrics.lines_processed, 2);
        assert_eq!(metrics.chunk_count, 1);
        assert_eq!(metrics.thread_count, 1);

        let empty: [&str; 0] = [];
        let (stats, metrics) = SequentialProcessor::new().process_with_metrics(&empty);
        assert!(stats.is_empty());
        assert_eq!(metrics.chunk_count, 0);
    }
}
