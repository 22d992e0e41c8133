//! Configuration schema for commit-hash-injector
//!
//! This module defines the data structures for the injector configuration:
//! which files to read and write, how the replacement value is obtained, and
//! how the commit hash API is served.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main injector configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InjectorConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Template document containing the placeholder
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Output document location
    #[serde(default = "default_dest_path")]
    pub dest_path: PathBuf,

    /// Literal replacement value; when set, no provider is queried
    #[serde(default)]
    pub replacement: Option<String>,

    /// Replacement template rendered around the version identifier
    #[serde(default = "default_template")]
    pub template: String,

    /// Write an unchanged copy instead of failing when no placeholder exists
    #[serde(default)]
    pub allow_missing: bool,

    /// Where the version identifier comes from
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Commit hash API settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_source_path() -> PathBuf {
    PathBuf::from("dist/indexVanilla.html")
}

fn default_dest_path() -> PathBuf {
    PathBuf::from("dist/index.html")
}

fn default_template() -> String {
    "Commit Hash: {{hash}}".to_string()
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            source_path: default_source_path(),
            dest_path: default_dest_path(),
            replacement: None,
            template: default_template(),
            allow_missing: false,
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
            debug: false,
        }
    }
}

/// Version identifier provider selection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Abbreviated hash of the latest commit in a git repository
    Git {
        #[serde(default = "default_repo")]
        repo: PathBuf,
        /// Minimum abbreviated hash length passed to git
        #[serde(default)]
        abbrev: Option<u8>,
    },
    /// Hash previously captured into a file
    File { path: PathBuf },
    /// Fixed value
    Fixed { value: String },
}

fn default_repo() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Git {
            repo: default_repo(),
            abbrev: None,
        }
    }
}

/// Settings for the commit hash HTTP API
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Value of the Access-Control-Allow-Origin header
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8081,
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

/// Values given on the command line, applied on top of the file config
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_path: Option<PathBuf>,
    pub dest_path: Option<PathBuf>,
    pub replacement: Option<String>,
    pub template: Option<String>,
    pub repo: Option<PathBuf>,
    pub hash_file: Option<PathBuf>,
    pub allow_missing: bool,
    pub debug: bool,
}

impl ConfigOverrides {
    /// Apply the overrides to a loaded configuration
    pub fn apply(self, mut config: InjectorConfig) -> InjectorConfig {
        if let Some(source_path) = self.source_path {
            config.source_path = source_path;
        }
        if let Some(dest_path) = self.dest_path {
            config.dest_path = dest_path;
        }
        if self.replacement.is_some() {
            config.replacement = self.replacement;
        }
        if let Some(template) = self.template {
            config.template = template;
        }

        // A hash file takes precedence over a repository
        if let Some(path) = self.hash_file {
            config.provider = ProviderConfig::File { path };
        } else if let Some(repo) = self.repo {
            let abbrev = match config.provider {
                ProviderConfig::Git { abbrev, .. } => abbrev,
                _ => None,
            };
            config.provider = ProviderConfig::Git { repo, abbrev };
        }

        config.allow_missing |= self.allow_missing;
        config.debug |= self.debug;
        config
    }
}
