//! Version provider trait definition
//!
//! All sources of a version identifier implement [`VersionProvider`], so the
//! injector and the HTTP API can be handed a fixed value in tests.

use crate::error::{InjectorError, Result};

/// Source of a short string identifying the current build
pub trait VersionProvider: Send + Sync {
    /// Short name of this provider type
    /// Examples: "git", "file", "fixed"
    fn kind(&self) -> &'static str;

    /// Obtain the version identifier
    /// An empty identifier is an error, never a valid result
    fn identifier(&self) -> Result<String>;
}

/// Trim raw provider output and reject empty values
pub fn validate_identifier(raw: &str, origin: &str) -> Result<String> {
    let identifier = raw.trim();
    if identifier.is_empty() {
        return Err(InjectorError::VersionIdentifierUnavailable(format!(
            "{} returned an empty identifier",
            origin
        )));
    }
    Ok(identifier.to_string())
}
