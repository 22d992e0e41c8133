//! Injection pipeline
//!
//! The [`Injector`] ties the pieces together: it resolves the replacement
//! value, reads the template lines, substitutes the placeholder and hands the
//! result to the sink.

use crate::config::{expand_path, InjectorConfig, ReplacementTemplate};
use crate::error::{InjectorError, Result};
use crate::lines::{FileSink, FileSource, LineSink, LineSource};
use crate::substitute::substitute;
use crate::version::{provider_from_config, validate_identifier, VersionProvider};
use crate::{debug_context, warn_log};

/// Summary of a completed injection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionReport {
    /// Zero-based index of the modified line; `None` if no placeholder existed
    pub line: Option<usize>,
    /// Value written over the placeholder
    pub replacement: String,
    /// The modified line, as written
    pub modified_line: Option<String>,
    /// Where the output went
    pub destination: String,
}

impl InjectionReport {
    pub fn found(&self) -> bool {
        self.line.is_some()
    }
}

/// Injects a version identifier into a template document
pub struct Injector {
    config: InjectorConfig,
    provider: Box<dyn VersionProvider>,
}

impl Injector {
    /// Create an injector with an explicit provider
    pub fn new(config: InjectorConfig, provider: Box<dyn VersionProvider>) -> Self {
        Self { config, provider }
    }

    /// Create an injector using the provider described by the configuration
    pub fn from_config(config: InjectorConfig) -> Result<Self> {
        let provider = provider_from_config(&config.provider)?;
        Ok(Self::new(config, provider))
    }

    /// Determine the value to write over the placeholder
    ///
    /// An explicit replacement is used verbatim; otherwise the provider is
    /// queried and its identifier rendered into the template. A blank
    /// explicit replacement is rejected like a blank provider identifier.
    pub fn resolve_replacement(&self) -> Result<String> {
        if let Some(replacement) = &self.config.replacement {
            debug_context!("Injector", "Using explicit replacement");
            validate_identifier(replacement, "explicit replacement")?;
            return Ok(replacement.clone());
        }

        let hash = self.provider.identifier()?;
        debug_context!("Injector", "{} provider returned {}", self.provider.kind(), hash);
        Ok(ReplacementTemplate::new(self.config.template.as_str()).render_hash(&hash))
    }

    /// Run one injection from `source` into `sink`
    ///
    /// The replacement is resolved before anything is read or written, so a
    /// missing version identifier never produces an output document.
    pub fn run(&self, source: &dyn LineSource, sink: &dyn LineSink) -> Result<InjectionReport> {
        let replacement = self.resolve_replacement()?;
        let lines = source.read_lines()?;
        let result = substitute(&lines, &replacement);

        if !result.found() {
            if !self.config.allow_missing {
                return Err(InjectorError::PlaceholderNotFound(source.describe()));
            }
            warn_log!(
                "No placeholder found in {}, writing unchanged copy to {}",
                source.describe(),
                sink.describe()
            );
        }

        sink.write_lines(&result.lines)?;

        Ok(InjectionReport {
            line: result.line,
            modified_line: result.modified_line().map(|line| line.trim_end().to_string()),
            replacement,
            destination: sink.describe(),
        })
    }

    /// Run using the configured source and destination files
    pub fn inject_files(&self) -> Result<InjectionReport> {
        let source = FileSource::new(expand_path(&self.config.source_path)?);
        let sink = FileSink::new(expand_path(&self.config.dest_path)?);
        self.run(&source, &sink)
    }
}
