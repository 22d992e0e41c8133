//! Captured hash file provider
//!
//! Reads a hash that an earlier step wrote to disk (for example a
//! `commitHash` file produced alongside the build output).

use crate::error::{InjectorError, Result};
use crate::version::r#trait::{validate_identifier, VersionProvider};
use std::fs;
use std::path::PathBuf;

/// Reads the version identifier from the first line of a file
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionProvider for FileProvider {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn identifier(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            InjectorError::VersionIdentifierUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let first_line = content.lines().next().unwrap_or("");
        validate_identifier(first_line, &self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_first_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commitHash");
        fs::write(&path, "abc1234\nignored\n").unwrap();

        assert_eq!(FileProvider::new(&path).identifier().unwrap(), "abc1234");
    }

    #[test]
    fn test_empty_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commitHash");
        fs::write(&path, "\n").unwrap();

        assert!(matches!(
            FileProvider::new(&path).identifier(),
            Err(InjectorError::VersionIdentifierUnavailable(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            FileProvider::new(dir.path().join("commitHash")).identifier(),
            Err(InjectorError::VersionIdentifierUnavailable(_))
        ));
    }
}
