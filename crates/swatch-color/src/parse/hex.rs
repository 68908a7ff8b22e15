//! `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` decoding.

use swatch_common::grammar::hex_digits;
use swatch_common::{ColorError, Rgba};

/// Decode `s` if it has hex form; `None` means try another form.
pub(super) fn parse_hex(s: &str) -> Option<Result<Rgba, ColorError>> {
    let digits = hex_digits(s)?;
    Some(decode(digits).ok_or_else(|| ColorError::InvalidFormat(s.to_owned())))
}

fn decode(digits: &str) -> Option<Rgba> {
    let width = if digits.len() < 6 { 1 } else { 2 };
    let has_alpha = digits.len() == 4 || digits.len() == 8;

    let channel = |index: usize| -> Option<f64> {
        let group = digits.get(index * width..(index + 1) * width)?;
        let value = u8::from_str_radix(group, 16).ok()?;
        // Short hex doubles each nibble: `f` is `ff`.
        let value = if width == 1 { value * 16 + value } else { value };
        Some(f64::from(value))
    };

    let r = channel(0)?;
    let g = channel(1)?;
    let b = channel(2)?;
    let a = if has_alpha { channel(3)? } else { 255.0 };

    Some(Rgba::new(r, g, b, a / 255.0))
}
