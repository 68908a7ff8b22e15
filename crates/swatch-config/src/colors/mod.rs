//! Color string validation for config values.
//!
//! Uses the same literal grammar as the parser, so any value accepted
//! here parses: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)` and
//! `rgba(r,g,b,a)` with finite numeric fields.


use swatch_common::grammar;

pub use swatch_common::grammar::is_color_name;

/// Validate that a string is a literal color: hex, `rgb()` or `rgba()`.
pub fn validate_color(s: &str) -> bool {
    grammar::is_literal_color(s)
}
