//! Markdown output formatter

use super::{counter_rows, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textstat_core::Comparison;

/// Markdown formatter - one table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()> {
        self.document_count += 1;

        let sequential = &comparison.sequential;
        let concurrent = &comparison.concurrent;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Counter | Sequential | Concurrent |")?;
        writeln!(self.writer, "|---|---:|---:|")?;

        let rows = counter_rows(&sequential.stats)
            .into_iter()
            .zip(counter_rows(&concurrent.stats));
        for ((label, seq), (_, conc)) in rows {
            writeln!(self.writer, "| {label} | {seq} | {conc} |")?;
        }
        writeln!(
            self.writer,
            "| time (µs) | {} | {} |",
            sequential.elapsed_micros(),
            concurrent.elapsed_micros()
        )?;

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*Chunk size {}, {} chunks, {} threads, paragraph divergence {}*",
            comparison.chunk_size,
            concurrent.chunks_processed,
            concurrent.threads_used,
            comparison.paragraph_divergence()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
