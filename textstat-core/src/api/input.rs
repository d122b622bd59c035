//! Input abstraction for the analysis API

use std::io::Read;
use std::path::{Path, PathBuf};

/// Unified input abstraction for various document sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// Text already split into lines
    Lines(Vec<String>),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::Lines(lines) => f
                .debug_struct("Input::Lines")
                .field("count", &lines.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from pre-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Split the input into owned lines
    ///
    /// Pre-split input is returned as is; everything else is decoded as
    /// UTF-8 and goes through [`split_lines`].
    pub fn into_lines(self) -> Result<Vec<String>, crate::api::Error> {
        let bytes = match self {
            Input::Lines(lines) => return Ok(lines),
            Input::Text(text) => return Ok(owned_lines(&text)),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                crate::api::Error::Input(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    crate::api::Error::Input(format!("Failed to read from reader: {}", e))
                })?;
                buffer
            }
        };

        let text = String::from_utf8(bytes)
            .map_err(|e| crate::api::Error::Input(format!("Invalid UTF-8 encoding: {}", e)))?;
        Ok(owned_lines(&text))
    }
}

fn owned_lines(text: &str) -> Vec<String> {
    split_lines(text).into_iter().map(str::to_owned).collect()
}

/// Split text into lines without their separators
///
/// Lines end at `\n`; a `\r` right before it is dropped as well. A trailing
/// separator does not produce an extra empty line, so `"a\nb\n"` and
/// `"a\nb"` both yield two lines, and `""` yields none.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        // Interior carriage returns are kept
        assert_eq!(split_lines("a\rb\n"), vec!["a\rb"]);
    }

    #[test]
    fn test_input_variants() {
        let lines = Input::from_text("one\ntwo\n").into_lines().unwrap();
        assert_eq!(lines, vec!["one", "two"]);

        let lines = Input::from_bytes(b"x\r\ny".to_vec()).into_lines().unwrap();
        assert_eq!(lines, vec!["x", "y"]);

        let lines = Input::from_lines(["kept", "", "as is"]).into_lines().unwrap();
        assert_eq!(lines, vec!["kept", "", "as is"]);

        // Pre-split lines are never re-joined and split again
        let lines = Input::from_lines(["a\nb", "", "c\r"]).into_lines().unwrap();
        assert_eq!(lines, vec!["a\nb", "", "c\r"]);

        let lines = Input::from_reader(Cursor::new("from\nreader"))
            .into_lines()
            .unwrap();
        assert_eq!(lines, vec!["from", "reader"]);
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "Hello world\n\nFoo 2 bar\n").unwrap();

        let lines = Input::from_file(&path).into_lines().unwrap();
        assert_eq!(lines, vec!["Hello world", "", "Foo 2 bar"]);
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/doc.txt")
            .into_lines()
            .unwrap_err();
        assert!(matches!(err, crate::api::Error::Input(_)));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Input::from_bytes(vec![0xff, 0xfe, b'a'])
            .into_lines()
            .unwrap_err();
        assert!(err.to_string().contains("Invalid UTF-8"));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
