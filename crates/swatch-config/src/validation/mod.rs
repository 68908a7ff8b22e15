//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod cache;
mod helpers;
mod palette;


use crate::schema::{SwatchConfig, CONFIG_SCHEMA_VERSION};
use swatch_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.version != CONFIG_SCHEMA_VERSION {
        errors.push(format!(
            "version = {} is not supported (expected {CONFIG_SCHEMA_VERSION})",
            config.version
        ));
    }

    cache::validate_cache(&mut errors, config);
    palette::validate_palette(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
