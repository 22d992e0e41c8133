//! Line sources and sinks
//!
//! The substitution routine works on an in-memory sequence of lines. These
//! traits are the boundary to wherever those lines come from and go to.
//! File-backed implementations keep each line's terminator so that writing
//! the lines back reproduces the document byte for byte.

use crate::error::{InjectorError, Result};
use std::fs;
use std::path::PathBuf;

/// Something that produces the lines of a document
pub trait LineSource {
    /// Read all lines, in document order
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable name used in messages
    fn describe(&self) -> String;
}

/// Something that consumes the lines of a document
pub trait LineSink {
    /// Persist the given lines, in order
    fn write_lines(&self, lines: &[String]) -> Result<()>;

    /// Human-readable name used in messages
    fn describe(&self) -> String;
}

/// Split text into lines, keeping `\n` / `\r\n` terminators attached
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Template document read from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| InjectorError::SourceUnreadable {
                path: self.describe(),
                source: e,
            })?;

        let lines = split_lines(&content);
        crate::debug_context!("FileSource", "Read {} lines from {}", lines.len(), self.describe());
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Output document written to disk
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSink for FileSink {
    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let unwritable = |e| InjectorError::SinkUnwritable {
            path: self.describe(),
            source: e,
        };

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(unwritable)?;
            }
        }

        fs::write(&self.path, lines.concat()).map_err(unwritable)?;
        crate::debug_context!("FileSink", "Wrote {} lines to {}", lines.len(), self.describe());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_keeps_terminators() {
        assert_eq!(
            split_lines("<html>\r\n<body>\n</html>"),
            vec!["<html>\r\n", "<body>\n", "</html>"]
        );
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_file_round_trip_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.html");
        let dst = dir.path().join("out.html");
        let content = "<html>\r\n  <p>xxxxxxxx</p>\n</html>\n";
        fs::write(&src, content).unwrap();

        let lines = FileSource::new(&src).read_lines().unwrap();
        FileSink::new(&dst).write_lines(&lines).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), content);
    }

    #[test]
    fn test_sink_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let dst = dir.path().join("dist").join("nested").join("index.html");

        FileSink::new(&dst)
            .write_lines(&["<html>\n".to_string()])
            .unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "<html>\n");
    }

    #[test]
    fn test_missing_source_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.html");

        let err = FileSource::new(&missing).read_lines().unwrap_err();
        assert!(matches!(err, InjectorError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_sink_into_file_path_is_unwritable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = FileSink::new(blocker.join("index.html"))
            .write_lines(&["x".to_string()])
            .unwrap_err();
        assert!(matches!(err, InjectorError::SinkUnwritable { .. }));
    }
}
