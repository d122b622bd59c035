//! Line chunking
//!
//! Splits an ordered line sequence into contiguous, non-overlapping chunks of
//! a fixed number of lines. Chunks borrow from the caller's slice; nothing is
//! copied.

use crate::application::config::{ProcessingError, ProcessingResult};

/// A contiguous run of lines assigned to one worker
#[derive(Debug, Clone)]
pub struct LineChunk<'a, L> {
    /// The lines of this chunk
    pub lines: &'a [L],
}

impl<L> LineChunk<'_, L> {
    /// Returns the number of lines in this chunk
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if this chunk has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Manages fixed-size line chunking
#[derive(Debug, Clone)]
pub struct ChunkManager {
    /// Number of lines per chunk
    chunk_size: usize,
}

impl ChunkManager {
    /// Creates a new chunk manager, rejecting a zero chunk size
    pub fn new(chunk_size: usize) -> ProcessingResult<Self> {
        if chunk_size == 0 {
            return Err(ProcessingError::InvalidConfig {
                reason: "Chunk size must be greater than 0".to_string(),
            });
        }

        Ok(Self { chunk_size })
    }

    /// Number of lines per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks `line_count` lines split into
    pub fn chunk_count(&self, line_count: usize) -> usize {
        line_count.div_ceil(self.chunk_size)
    }

    /// Partitions lines into chunks; only the last chunk may be shorter
    pub fn chunk_lines<'a, L>(&self, lines: &'a [L]) -> Vec<LineChunk<'a, L>> {
        lines
            .chunks(self.chunk_size)
            .map(|slice| LineChunk { lines: slice })
            .collect()
    }

    /// Counts chunk boundaries that split a paragraph
    ///
    /// A boundary splits a paragraph when the last line of one chunk and the
    /// first line of the next are both non-blank. Each such boundary makes
    /// the chunked paragraph count exceed the sequential one by exactly one.
    pub fn boundary_splits<L: AsRef<str>>(&self, lines: &[L]) -> usize {
        let is_blank = |line: &L| line.as_ref().trim().is_empty();

        (self.chunk_size..lines.len())
            .step_by(self.chunk_size)
            .filter(|&start| !is_blank(&lines[start - 1]) && !is_blank(&lines[start]))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(matches!(
            ChunkManager::new(0),
            Err(ProcessingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let manager = ChunkManager::new(4).unwrap();
        let lines: Vec<String> = Vec::new();

        assert!(manager.chunk_lines(&lines).is_empty());
        assert_eq!(manager.chunk_count(0), 0);
    }

    #[test]
    fn test_ragged_partition() {
        let manager = ChunkManager::new(3).unwrap();
        let lines: Vec<String> = (0..7).map(|i| format!("line {i}")).collect();

        let chunks = manager.chunk_lines(&lines);
        assert_eq!(chunks.len(), 3);
        assert_eq!(manager.chunk_count(lines.len()), 3);

        assert_eq!(chunks[0].lines, &lines[0..3]);
        assert_eq!(chunks[1].lines, &lines[3..6]);
        assert_eq!(chunks[2].lines, &lines[6..]);
        assert_eq!(chunks[2].len(), 1);
    }

    #[test]
    fn test_chunks_cover_input_in_order() {
        let manager = ChunkManager::new(4).unwrap();
        let lines: Vec<usize> = (0..21).collect();

        let rebuilt: Vec<usize> = manager
            .chunk_lines(&lines)
            .iter()
            .flat_map(|c| c.lines.iter().copied())
            .collect();
        assert_eq!(rebuilt, lines);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        let manager = ChunkManager::new(100).unwrap();
        let lines = ["a", "b"];

        let chunks = manager.chunk_lines(&lines);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 2);
    }

    #[test]
    fn test_boundary_splits() {
        let lines = ["a", "b", "", "c", "d", "e"];

        // Chunks [a b] ["" c] [d e]: only c|d splits a paragraph
        let manager = ChunkManager::new(2).unwrap();
        assert_eq!(manager.boundary_splits(&lines), 1);

        // Every adjacent non-blank pair is split
        let manager = ChunkManager::new(1).unwrap();
        assert_eq!(manager.boundary_splits(&lines), 3);

        let manager = ChunkManager::new(6).unwrap();
        assert_eq!(manager.boundary_splits(&lines), 0);
    }
}
