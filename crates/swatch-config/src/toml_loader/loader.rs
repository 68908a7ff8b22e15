//! Core TOML config loading: read from a string, a path, or the platform default.

use crate::schema::SwatchConfig;
use crate::validation;
use std::path::Path;
use swatch_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config from TOML text.
///
/// Missing fields take serde defaults. Validation failures are logged
/// and the parsed config is returned as-is.
pub fn load_from_str(content: &str) -> Result<SwatchConfig, ConfigError> {
    let config: SwatchConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<SwatchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/swatch/config.toml`
/// On Linux: `~/.config/swatch/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SwatchConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(SwatchConfig::default())
        }
        Err(e) => Err(e),
    }
}
