//! Color tuple to string conversion.

use swatch_common::Rgba;

use crate::normalize::round_half_up;

/// Format a color as `rgba(R,G,B,A)`.
///
/// Fractional channels are rounded (add 0.5, truncate). Nothing is
/// clamped: the tuple is trusted as given.
pub fn format_rgba(color: &Rgba) -> String {
    format_channels([color.r, color.g, color.b], Some(color.a))
}

/// Format raw channels as `rgba(R,G,B,A)`; a missing alpha prints as `1`.
pub fn format_channels(rgb: [f64; 3], alpha: Option<f64>) -> String {
    let [r, g, b] = rgb.map(integral);
    let a = alpha.unwrap_or(1.0);
    format!("rgba({r},{g},{b},{a})")
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
///
/// Channels are rounded and clamped to bytes; alpha is scaled to `0..=255`.
pub fn to_hex(color: &Rgba) -> String {
    let byte = |v: f64| round_half_up(v).clamp(0.0, 255.0) as u8;
    let (r, g, b) = (byte(color.r), byte(color.g), byte(color.b));
    let a = byte(color.a.clamp(0.0, 1.0) * 255.0);
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

fn integral(v: f64) -> f64 {
    if v.fract() == 0.0 {
        v + 0.0
    } else {
        round_half_up(v)
    }
}
