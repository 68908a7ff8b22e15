//! User palette of extra named colors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named colors defined in config, e.g. `accent = "#00d4ff"`.
///
/// Entries are consulted before the built-in named color table. Names
/// match case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteConfig {
    pub colors: BTreeMap<String, String>,
}

impl PaletteConfig {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
