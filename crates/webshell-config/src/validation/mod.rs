//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod bridge;
mod helpers;
mod navigation;
mod shell;

#[cfg(test)]
mod tests;

use crate::schema::WebshellConfig;
use webshell_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WebshellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    shell::validate_shell(&mut errors, config);
    navigation::validate_navigation(&mut errors, config);
    bridge::validate_bridge(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
