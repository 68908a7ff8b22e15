//! Entry points over [`ColorInput`].

use swatch_common::{ColorError, ColorInput, Rgba};

use crate::cache::ColorCache;
use crate::serialize::format_rgba;

/// String form of a color: raw text is returned unchanged, tuples are
/// formatted as `rgba(...)`. Never cached.
pub fn as_string(input: ColorInput) -> String {
    match input {
        ColorInput::Raw(s) => s,
        ColorInput::Parsed(color) => format_rgba(&color),
    }
}

/// Tuple form of a color: tuples are returned unchanged, raw text goes
/// through `cache`.
pub fn as_array(input: &ColorInput, cache: &ColorCache) -> Result<Rgba, ColorError> {
    match input {
        ColorInput::Raw(s) => cache.lookup(s),
        ColorInput::Parsed(color) => Ok(*color),
    }
}
