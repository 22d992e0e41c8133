//! Version identifier providers
//!
//! This module provides the sources a replacement value can be taken from:
//! the latest git commit, a file holding a captured hash, or a fixed value.

pub mod file;
pub mod fixed;
pub mod git;
pub mod r#trait;

pub use file::FileProvider;
pub use fixed::FixedProvider;
pub use git::GitProvider;
pub use r#trait::{validate_identifier, VersionProvider};

use crate::config::{expand_path, ProviderConfig};
use crate::error::Result;

/// Create the provider described by the configuration
pub fn provider_from_config(config: &ProviderConfig) -> Result<Box<dyn VersionProvider>> {
    let provider: Box<dyn VersionProvider> = match config {
        ProviderConfig::Git { repo, abbrev } => {
            let mut provider = GitProvider::new(expand_path(repo)?);
            if let Some(abbrev) = abbrev {
                provider = provider.with_abbrev(*abbrev);
            }
            Box::new(provider)
        }
        ProviderConfig::File { path } => Box::new(FileProvider::new(expand_path(path)?)),
        ProviderConfig::Fixed { value } => Box::new(FixedProvider::new(value.clone())),
    };

    crate::debug_context!("version", "Using {} provider", provider.kind());
    Ok(provider)
}
