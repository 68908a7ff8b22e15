//! Configuration schema types for Swatch.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod cache;
mod palette;

pub use cache::*;
pub use palette::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Schema version the file was written for; must equal [`CONFIG_SCHEMA_VERSION`].
    pub version: u32,
    pub cache: CacheConfig,
    pub palette: PaletteConfig,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_SCHEMA_VERSION,
            cache: CacheConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}
