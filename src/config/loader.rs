//! Configuration file loading and saving
//!
//! The configuration lives in `commit-hash-injector.json` in the working
//! directory unless another path is given on the command line.

use crate::config::schema::InjectorConfig;
use crate::error::{InjectorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "commit-hash-injector.json";

/// Create a default configuration
pub fn default_config() -> InjectorConfig {
    InjectorConfig::default()
}

/// Load configuration from a specific path
/// If the file doesn't exist, returns a default configuration
pub fn load_config_from_path(path: &Path) -> Result<InjectorConfig> {
    if !path.exists() {
        crate::debug_context!("config", "{} not found, using defaults", path.display());
        return Ok(default_config());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        InjectorError::ConfigError(format!("Failed to read config file: {}", e))
    })?;

    let config: InjectorConfig = serde_json::from_str(&content)?;

    Ok(config)
}

/// Save configuration to a specific path
pub fn save_config_to_path(config: &InjectorConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config).map_err(|e| {
        InjectorError::ConfigError(format!("Failed to serialize config: {}", e))
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                InjectorError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }
    }

    fs::write(path, content)
        .map_err(|e| InjectorError::ConfigError(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Expand `~` and environment variables in a configured path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw).map_err(|e| {
        InjectorError::InvalidInput(format!("Failed to expand path {}: {}", raw, e))
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.template, "Commit Hash: {{hash}}");
        assert!(matches!(config.provider, ProviderConfig::Git { .. }));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        let mut original_config = default_config();
        original_config.replacement = Some("release-7".to_string());
        original_config.provider = ProviderConfig::Fixed {
            value: "abc1234".to_string(),
        };
        save_config_to_path(&original_config, &path).unwrap();

        let loaded_config = load_config_from_path(&path).unwrap();
        assert_eq!(original_config.version, loaded_config.version);
        assert_eq!(original_config.replacement, loaded_config.replacement);
        assert_eq!(original_config.provider, loaded_config.provider);
    }

    #[test]
    fn test_load_nonexistent_config_returns_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "{ not json").unwrap();

        let err = load_config_from_path(temp_file.path()).unwrap_err();
        assert!(matches!(err, InjectorError::JsonParseError(_)));
    }

    #[test]
    fn test_load_config_with_wrong_field_type() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{ "server": { "port": "eighty" } }"#).unwrap();

        let err = load_config_from_path(temp_file.path()).unwrap_err();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        let path = expand_path(Path::new("dist/index.html")).unwrap();
        assert_eq!(path, PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_expand_path_unknown_variable() {
        let err = expand_path(Path::new("$COMMIT_HASH_INJECTOR_UNSET_VAR/index.html")).unwrap_err();
        assert!(matches!(err, InjectorError::InvalidInput(_)));
    }
}
