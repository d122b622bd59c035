//! Property tests comparing the sequential and chunked analyzers
//!
//! Every counter except paragraphs must agree for any positive chunk size.
//! Paragraphs may only grow, by exactly the number of chunk boundaries that
//! fall inside a run of non-blank lines.

use proptest::prelude::*;
use std::sync::OnceLock;
use textstat_core::application::{ChunkManager, ChunkedProcessor, SequentialProcessor};
use textstat_core::domain::scan_lines;
use textstat_core::{MonoidReduce, StatisticsRecord};

/// Lines mixing blank, whitespace-only, ASCII and non-ASCII content
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        1 => "[ \t]{1,4}",
        6 => "[a-zA-Z0-9 ,.!?]{1,30}",
        2 => "[àéîõüßΩ日本語٣Ⅻ²½कि 0-9a-z]{1,12}",
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..60)
}

/// Per-chunk records in chunk order
fn chunk_partials(lines: &[String], chunk_size: usize) -> Vec<StatisticsRecord> {
    ChunkManager::new(chunk_size)
        .unwrap()
        .chunk_lines(lines)
        .iter()
        .map(|chunk| scan_lines(chunk.lines))
        .collect()
}

/// A document, a chunk size and its per-chunk records in random order
fn shuffled_partials_strategy(
) -> impl Strategy<Value = (Vec<String>, usize, Vec<StatisticsRecord>)> {
    (lines_strategy(), 1usize..10).prop_flat_map(|(lines, chunk_size)| {
        let partials = chunk_partials(&lines, chunk_size);
        (Just(lines), Just(chunk_size), Just(partials).prop_shuffle())
    })
}

fn chunked() -> &'static ChunkedProcessor {
    static PROCESSOR: OnceLock<ChunkedProcessor> = OnceLock::new();
    PROCESSOR.get_or_init(|| ChunkedProcessor::new().unwrap())
}

proptest! {
    #[test]
    fn counters_agree_for_any_chunk_size(lines in lines_strategy(), chunk_size in 1usize..20) {
        let sequential = SequentialProcessor::new().process(&lines);
        let concurrent = chunked().process(&lines, chunk_size).unwrap();

        prop_assert!(concurrent.agrees_ignoring_paragraphs(&sequential));
        prop_assert!(concurrent.paragraph_count >= sequential.paragraph_count);
    }

    #[test]
    fn paragraph_divergence_equals_boundary_splits(
        lines in lines_strategy(),
        chunk_size in 1usize..20,
    ) {
        let sequential = SequentialProcessor::new().process(&lines);
        let concurrent = chunked().process(&lines, chunk_size).unwrap();
        let splits = ChunkManager::new(chunk_size).unwrap().boundary_splits(&lines);

        prop_assert_eq!(
            concurrent.paragraph_count,
            sequential.paragraph_count + splits
        );
    }

    #[test]
    fn paragraphs_non_decreasing_under_refinement(
        lines in lines_strategy(),
        chunk_size in 1usize..8,
        factor in 2usize..5,
    ) {
        // Every boundary of the coarse partition is also a boundary of the
        // fine one, so the fine partition can only split more paragraphs
        let fine = chunked().process(&lines, chunk_size).unwrap();
        let coarse = chunked().process(&lines, chunk_size * factor).unwrap();
        let single = chunked().process(&lines, 1).unwrap();

        prop_assert!(fine.paragraph_count >= coarse.paragraph_count);
        prop_assert!(single.paragraph_count >= fine.paragraph_count);
    }

    #[test]
    fn merge_order_does_not_matter(
        (lines, chunk_size, shuffled) in shuffled_partials_strategy(),
    ) {
        let in_order: StatisticsRecord = chunk_partials(&lines, chunk_size).into_iter().sum();

        prop_assert_eq!(StatisticsRecord::reduce(shuffled), in_order);
        prop_assert_eq!(chunked().process(&lines, chunk_size).unwrap(), in_order);
    }

    #[test]
    fn records_are_consistent(lines in lines_strategy(), chunk_size in 1usize..20) {
        let sequential = SequentialProcessor::new().process(&lines);
        let concurrent = chunked().process(&lines, chunk_size).unwrap();

        for stats in [sequential, concurrent] {
            prop_assert!(stats.is_consistent());
            prop_assert_eq!(stats.alpha_count, stats.vowel_count + stats.non_vowel_count);
            prop_assert_eq!(stats.line_count, lines.len());
        }
    }

    #[test]
    fn whole_document_chunk_matches_sequential(lines in lines_strategy()) {
        let sequential = SequentialProcessor::new().process(&lines);
        let concurrent = chunked().process(&lines, lines.len().max(1)).unwrap();

        prop_assert_eq!(concurrent, sequential);
    }
}
