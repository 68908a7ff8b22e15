//! Color string parsing.
//!
//! Accepted forms, tried in this order:
//! - a bare alphabetic word, resolved through a [`NamedColorResolver`]
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgba(r,g,b,a)`
//! - `rgb(r,g,b)`
//!
//! Every form yields an [`Rgba`] with integral channels in `[0, 255]` and
//! alpha in `[0, 1]`.

mod function;
mod hex;


use std::fmt;
use swatch_common::grammar::{function_args, is_color_name};
use swatch_common::{ColorError, Rgba};
use tracing::trace;

use crate::resolver::{CssNamedColors, NamedColorResolver};

/// Parses color strings, resolving names through an injected resolver.
pub struct ColorParser {
    resolver: Box<dyn NamedColorResolver>,
}

impl ColorParser {
    pub fn new(resolver: impl NamedColorResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Parse any accepted color string.
    pub fn parse(&self, s: &str) -> Result<Rgba, ColorError> {
        if !is_color_name(s) {
            return parse_literal(s);
        }

        let resolved = self
            .resolver
            .resolve(s)
            .ok_or_else(|| ColorError::InvalidFormat(format!("unknown color name '{s}'")))?;
        trace!(name = s, resolved = %resolved, "resolved named color");

        parse_literal(&resolved).map_err(|_| {
            ColorError::InvalidFormat(format!(
                "color name '{s}' resolved to unparseable '{resolved}'"
            ))
        })
    }
}

impl Default for ColorParser {
    fn default() -> Self {
        Self::new(CssNamedColors)
    }
}

impl fmt::Debug for ColorParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorParser").finish_non_exhaustive()
    }
}

/// Parse a hex, `rgb()` or `rgba()` string. Names are rejected.
pub fn parse_literal(s: &str) -> Result<Rgba, ColorError> {
    if let Some(color) = hex::parse_hex(s) {
        return color;
    }
    if let Some(args) = function_args(s, "rgba") {
        return function::parse_rgba(s, args);
    }
    if let Some(args) = function_args(s, "rgb") {
        return function::parse_rgb(s, args);
    }
    Err(ColorError::InvalidFormat(s.to_owned()))
}

/// Parse with the built-in CSS names.
pub fn parse_color(s: &str) -> Result<Rgba, ColorError> {
    ColorParser::default().parse(s)
}
