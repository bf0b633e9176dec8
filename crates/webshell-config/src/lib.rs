//! WebShell configuration system.
//!
//! Provides TOML-based configuration for the hosted page, the navigation
//! allow-list, the bridge message filter, and logging. All sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webshell_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::WebshellConfig;

use std::path::Path;
use webshell_common::ConfigError;

/// Load and validate the config.
///
/// With `path` set, that file must exist. Without it, `config.toml` is read
/// from the OS config directory and created from the template if missing.
pub fn load_config(path: Option<&Path>) -> Result<WebshellConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WebshellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
