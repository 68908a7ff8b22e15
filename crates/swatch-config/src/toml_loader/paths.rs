//! Where the config file lives, and writing the commented default.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use swatch_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SWATCH_CONFIG";

/// The config file path: `$SWATCH_CONFIG` if set, else `swatch/config.toml`
/// under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        dirs::config_dir(),
    )
}

pub(super) fn resolve_config_path(
    explicit: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    config_dir
        .map(|dir| dir.join("swatch").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "could not determine config directory; set {CONFIG_PATH_ENV}"
            ))
        })
}

/// Write the commented default config to `path`, creating parent directories.
///
/// Fails if `path` already exists.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_failed)?;
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_failed)?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
