//! Channel rounding and clamping.

use swatch_common::Rgba;

/// Round `r`, `g`, `b` to integers clamped to `[0, 255]` and clamp `a` to `[0, 1]`.
pub fn normalize(raw: [f64; 4]) -> Rgba {
    let mut out = Rgba::TRANSPARENT;
    normalize_into(raw, &mut out);
    out
}

/// Same as [`normalize`], writing into `out`.
pub fn normalize_into(raw: [f64; 4], out: &mut Rgba) {
    out.r = channel(raw[0]);
    out.g = channel(raw[1]);
    out.b = channel(raw[2]);
    out.a = raw[3].clamp(0.0, 1.0) + 0.0;
}

/// Add 0.5 and truncate toward zero.
pub(crate) fn round_half_up(v: f64) -> f64 {
    // `+ 0.0` turns -0 into 0
    (v + 0.5).trunc() + 0.0
}

fn channel(v: f64) -> f64 {
    round_half_up(v).clamp(0.0, 255.0)
}
