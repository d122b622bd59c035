//! Output formatting module

use anyhow::Result;
use textstat_core::{Comparison, StatisticsRecord};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the results of both analyzers for one document
    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Counter labels paired with their values, in display order
pub(crate) fn counter_rows(stats: &StatisticsRecord) -> [(&'static str, usize); 8] {
    [
        ("paragraphs", stats.paragraph_count),
        ("lines", stats.line_count),
        ("words", stats.word_count),
        ("characters", stats.char_count),
        ("letters", stats.alpha_count),
        ("digits", stats.digit_count),
        ("vowels", stats.vowel_count),
        ("non-vowels", stats.non_vowel_count),
    ]
}
