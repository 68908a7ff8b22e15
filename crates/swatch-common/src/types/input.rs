use serde::{Deserialize, Serialize};

use super::Rgba;

/// A color in either of its two accepted shapes.
///
/// Color-consuming APIs take this so callers can hand over whatever they
/// already hold: the raw text or an already-parsed tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Raw(String),
    Parsed(Rgba),
}

impl ColorInput {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            Self::Parsed(_) => None,
        }
    }

    pub fn as_parsed(&self) -> Option<Rgba> {
        match self {
            Self::Raw(_) => None,
            Self::Parsed(color) => Some(*color),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<Rgba> for ColorInput {
    fn from(color: Rgba) -> Self {
        Self::Parsed(color)
    }
}

impl From<[f64; 4]> for ColorInput {
    fn from(raw: [f64; 4]) -> Self {
        Self::Parsed(Rgba::from_array(raw))
    }
}
