//! Git commit hash provider
//!
//! Runs `git log --pretty=format:%h -1` in the configured repository and uses
//! the abbreviated hash of the latest commit.

use crate::error::{InjectorError, Result};
use crate::version::r#trait::{validate_identifier, VersionProvider};
use std::path::PathBuf;
use std::process::Command;

/// Reads the latest commit hash from a git repository
#[derive(Debug, Clone)]
pub struct GitProvider {
    repo: PathBuf,
    abbrev: Option<u8>,
}

impl GitProvider {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            abbrev: None,
        }
    }

    /// Request at least `abbrev` hex digits in the hash
    pub fn with_abbrev(mut self, abbrev: u8) -> Self {
        self.abbrev = Some(abbrev);
        self
    }

    /// Arguments passed to `git`
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--pretty=format:%h".to_string(),
            "-1".to_string(),
        ];
        if let Some(abbrev) = self.abbrev {
            args.push(format!("--abbrev={}", abbrev));
        }
        args
    }
}

impl VersionProvider for GitProvider {
    fn kind(&self) -> &'static str {
        "git"
    }

    fn identifier(&self) -> Result<String> {
        crate::debug_context!("GitProvider", "Running git {:?} in {}", self.args(), self.repo.display());

        let output = Command::new("git")
            .args(self.args())
            .current_dir(&self.repo)
            .output()
            .map_err(|e| {
                InjectorError::VersionIdentifierUnavailable(format!("Failed to execute git: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InjectorError::VersionIdentifierUnavailable(format!(
                "git exited with {} in {}: {}",
                output.status,
                self.repo.display(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            InjectorError::VersionIdentifierUnavailable(format!("git output is not UTF-8: {}", e))
        })?;

        validate_identifier(&stdout, "git log")
    }
}
