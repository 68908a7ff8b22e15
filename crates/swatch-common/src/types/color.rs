use serde::{Deserialize, Serialize};

/// A normalized color tuple.
///
/// `r`, `g` and `b` are expected to hold integral values in `[0, 255]` and
/// `a` a value in `[0, 1]`. Values produced by the parser always satisfy
/// this; hand-built values are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channel values.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_array(raw: [f64; 4]) -> Self {
        Self::new(raw[0], raw[1], raw[2], raw[3])
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(raw: [f64; 4]) -> Self {
        Self::from_array(raw)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}
