//! Line-oriented text statistics with sequential and chunked parallel analyzers
//!
//! This crate counts paragraphs, lines, words, characters, letters, digits,
//! vowels and non-vowel letters in a document supplied as a sequence of
//! lines. The counts are computed two ways so their results and timings can
//! be compared:
//!
//! - a single sequential pass that tracks paragraphs across the whole document
//! - a chunked pass that splits the lines into fixed-size chunks, scans the
//!   chunks in parallel and merges the partial records
//!
//! Partial records form a monoid under field-wise addition, so the merge is
//! independent of the order in which chunks finish. Paragraph state resets at
//! every chunk start; a paragraph straddling a chunk boundary is counted once
//! per chunk, and every other counter always matches the sequential pass.
//!
//! # Architecture
//!
//! - **Domain layer**: statistics record, line classifier, monoid merge
//! - **Application layer**: chunking, thread pool and processing orchestration
//! - **API layer**: configuration, input handling and result types
//!
//! # Example
//!
//! ```rust
//! use textstat_core::{Input, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let comparison = analyzer
//!     .compare(Input::from_text("Hello world\n\nFoo 2 bar\n"))
//!     .unwrap();
//!
//! assert_eq!(comparison.sequential.stats.paragraph_count, 2);
//! assert_eq!(comparison.sequential.stats.word_count, 5);
//! assert!(comparison.counters_agree());
//! ```

pub mod api;
pub mod application;
pub mod domain;

pub use api::{
    analyze_concurrent, analyze_sequential, split_lines, Analysis, AnalysisMode, Comparison,
    ComparisonReport, Config, ConfigBuilder, Error, Input, Result, TextAnalyzer,
};
pub use domain::{CharClass, LineScanner, Monoid, MonoidReduce, ParagraphState, StatisticsRecord};
