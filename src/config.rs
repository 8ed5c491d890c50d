//! Template defaults handling for Stencil templates.
//! A template ships a configuration file declaring its parameters and their
//! default values, in declaration order. Later defaults may reference
//! earlier parameters through template expressions.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Supported configuration file names, tried in order.
pub const CONFIG_FILES: [&str; 3] = ["stencil.json", "stencil.yml", "stencil.yaml"];

/// Ordered mapping from parameter name to its default value.
pub type Defaults = IndexMap<String, serde_json::Value>;

/// Loads the raw configuration content from a template directory, trying
/// multiple file formats.
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn load_config<P: AsRef<Path>>(template_dir: P) -> Result<String> {
    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return std::fs::read_to_string(&config_path).map_err(Error::IoError);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        CONFIG_FILES.join(", ")
    )))
}

/// Parses configuration content into an ordered defaults mapping.
/// Tries JSON first, then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<Defaults> {
    let defaults: Defaults = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };
    Ok(defaults)
}

/// Loads and parses the template configuration in one step.
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<Defaults> {
    let content = load_config(template_dir)?;
    parse_config(&content)
}
