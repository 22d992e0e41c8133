//! Fixed value provider

use crate::error::Result;
use crate::version::r#trait::{validate_identifier, VersionProvider};

/// Always returns the same identifier
#[derive(Debug, Clone)]
pub struct FixedProvider {
    value: String,
}

impl FixedProvider {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl VersionProvider for FixedProvider {
    fn kind(&self) -> &'static str {
        "fixed"
    }

    fn identifier(&self) -> Result<String> {
        validate_identifier(&self.value, "fixed provider")
    }
}
