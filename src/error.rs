//! Error types for commit-hash-injector
//!
//! This module defines structured error types using the `thiserror` crate.
//! A missing placeholder is an ordinary outcome of the substitution routine
//! and only becomes an error at the injector level.

use std::io;
use thiserror::Error;

/// Main error type for the commit-hash-injector application
#[derive(Error, Debug)]
pub enum InjectorError {
    /// No line of the template contains the eight-`x` placeholder
    #[error("No xxxxxxxx placeholder found in {0}")]
    PlaceholderNotFound(String),

    /// The template document could not be read
    #[error("Failed to read {path}: {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output document could not be written
    #[error("Failed to write {path}: {source}")]
    SinkUnwritable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The version identifier could not be obtained or was empty
    #[error("Version identifier unavailable: {0}")]
    VersionIdentifierUnavailable(String),

    /// Configuration file could not be loaded or saved
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during JSON parsing or serialization
    #[error("JSON parsing error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// Generic I/O failure outside of the template source and sink
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Invalid command-line or configuration input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for the injector
pub type Result<T> = std::result::Result<T, InjectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_not_found_message() {
        let err = InjectorError::PlaceholderNotFound("dist/indexVanilla.html".to_string());
        assert_eq!(
            err.to_string(),
            "No xxxxxxxx placeholder found in dist/indexVanilla.html"
        );
    }

    #[test]
    fn test_source_unreadable_keeps_cause() {
        let err = InjectorError::SourceUnreadable {
            path: "missing.html".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.html"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
