//! Plain text output formatter

use super::{counter_rows, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};
use textstat_core::Comparison;

/// Plain text formatter - one aligned table per document
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_comparison(&mut self, source: &str, comparison: &Comparison) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        let sequential = &comparison.sequential;
        let concurrent = &comparison.concurrent;

        writeln!(self.writer, "Document: {source}")?;
        writeln!(
            self.writer,
            "Chunk size: {} lines ({} chunks, {} threads)",
            comparison.chunk_size, concurrent.chunks_processed, concurrent.threads_used
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<12} {:>12} {:>12}",
            "counter", "sequential", "concurrent"
        )?;

        let rows = counter_rows(&sequential.stats)
            .into_iter()
            .zip(counter_rows(&concurrent.stats));
        for ((label, seq), (_, conc)) in rows {
            writeln!(self.writer, "{label:<12} {seq:>12} {conc:>12}")?;
        }

        writeln!(
            self.writer,
            "{:<12} {:>12} {:>12}",
            "time (us)",
            sequential.elapsed_micros(),
            concurrent.elapsed_micros()
        )?;

        let divergence = comparison.paragraph_divergence();
        if divergence > 0 {
            writeln!(
                self.writer,
                "Paragraph divergence: {divergence} (paragraphs split by chunk boundaries)"
            )?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
