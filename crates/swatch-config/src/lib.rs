//! Swatch configuration system.
//!
//! Provides TOML-based configuration for the color cache and the user
//! palette of extra named colors. All sections use serde defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use swatch_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("cache holds up to {} colors", config.cache.max_entries);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CacheConfig, PaletteConfig, SwatchConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path, load_from_str};

use swatch_common::ConfigError;

/// Load config from the platform default path and validate it strictly.
///
/// Unlike [`load_from_path`], which only warns, a config that fails
/// validation is an error here.
pub fn load_config() -> Result<SwatchConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
