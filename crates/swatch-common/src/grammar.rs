//! Literal color syntax shared by the parser and config validation.
//!
//! These functions only recognize shapes; turning the pieces into a color
//! is left to the caller.

use regex::Regex;
use std::sync::LazyLock;

/// Exactly 3, 4, 6 or 8 digits. 5 and 7 are rejected.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// A bare word: the only shape sent to name resolution.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// The hex digits of `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn hex_digits(s: &str) -> Option<&str> {
    HEX_RE.is_match(s).then(|| &s[1..])
}

/// Whether `s` has the shape of a named color: letters only.
pub fn is_color_name(s: &str) -> bool {
    NAME_RE.is_match(s)
}

/// The interior of `name(...)`, e.g. `function_args("rgb(1,2,3)", "rgb")`.
pub fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

/// One numeric field: surrounding whitespace trimmed, finite values only.
pub fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split comma-separated `args` into exactly `N` fields.
pub fn function_fields<const N: usize>(args: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = args.split(',');
    for slot in &mut out {
        *slot = parse_field(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Whether `s` is a hex, `rgba()` or `rgb()` color with valid fields.
pub fn is_literal_color(s: &str) -> bool {
    if hex_digits(s).is_some() {
        return true;
    }
    if let Some(args) = function_args(s, "rgba") {
        return function_fields::<4>(args).is_some();
    }
    if let Some(args) = function_args(s, "rgb") {
        return function_fields::<3>(args).is_some();
    }
    false
}
