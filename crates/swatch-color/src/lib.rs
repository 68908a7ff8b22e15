//! Color string parsing, memoization and formatting.
//!
//! Converts between color text (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
//! `rgb()`, `rgba()` and named colors) and [`Rgba`] tuples, and back to
//! canonical `rgba(R,G,B,A)` strings.
//!
//! ```rust
//! use swatch_color::{as_array, as_string, ColorCache, Rgba};
//!
//! let cache = ColorCache::default();
//! let red = as_array(&"#f00".into(), &cache).unwrap();
//! assert_eq!(red, Rgba::rgb(255.0, 0.0, 0.0));
//! assert_eq!(as_string(red.into()), "rgba(255,0,0,1)");
//! ```

pub mod cache;
pub mod dispatch;
pub mod normalize;
pub mod parse;
pub mod resolver;
pub mod serialize;

pub use cache::{CacheStats, ColorCache};
pub use dispatch::{as_array, as_string};
pub use normalize::{normalize, normalize_into};
pub use parse::{parse_color, parse_literal, ColorParser};
pub use resolver::{CssNamedColors, NamedColorResolver, NoNamedColors, PaletteResolver};
pub use serialize::{format_channels, format_rgba, to_hex};
pub use swatch_common::{ColorError, ColorInput, EvictionPolicy, Rgba};

use std::path::Path;
use swatch_config::{validation, SwatchConfig};
use tracing::info;

/// Build a cache from a loaded config.
///
/// Names resolve through the config palette first, then the CSS names.
pub fn cache_from_config(config: &SwatchConfig) -> ColorCache {
    let resolver = PaletteResolver::new(config.palette.clone(), CssNamedColors);
    ColorCache::from_config(&config.cache, resolver)
}

/// Load and strictly validate a config file, then build a cache from it.
pub fn cache_from_config_path(path: &Path) -> swatch_common::Result<ColorCache> {
    let config = swatch_config::load_from_path(path)?;
    validation::validate(&config)?;
    info!(
        max_entries = config.cache.max_entries,
        eviction = %config.cache.eviction,
        palette = config.palette.len(),
        "color cache configured"
    );
    Ok(cache_from_config(&config))
}
