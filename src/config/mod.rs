//! Configuration management module
//!
//! This module handles loading, saving, and overriding the injector
//! configuration, and rendering the replacement template.

pub mod loader;
pub mod schema;
pub mod templates;

pub use loader::{default_config, expand_path, load_config_from_path, save_config_to_path, DEFAULT_CONFIG_FILE};
pub use schema::{ConfigOverrides, InjectorConfig, ProviderConfig, ServerConfig};
pub use templates::ReplacementTemplate;
