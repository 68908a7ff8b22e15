//! `rgb(r,g,b)` and `rgba(r,g,b,a)` decoding.

use swatch_common::grammar::function_fields;
use swatch_common::{ColorError, Rgba};

use crate::normalize::normalize;

/// Decode the comma-separated interior of `rgba(...)`.
pub(super) fn parse_rgba(s: &str, args: &str) -> Result<Rgba, ColorError> {
    let [r, g, b, a] =
        function_fields::<4>(args).ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))?;
    Ok(normalize([r, g, b, a]))
}

/// Decode the comma-separated interior of `rgb(...)`. Alpha is 1.
pub(super) fn parse_rgb(s: &str, args: &str) -> Result<Rgba, ColorError> {
    let [r, g, b] =
        function_fields::<3>(args).ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))?;
    Ok(normalize([r, g, b, 1.0]))
}
