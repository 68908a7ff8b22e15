//! Palette validation: letter-only names mapped to literal colors.

use std::collections::BTreeMap;

use crate::colors::{is_color_name, validate_color};
use crate::schema::SwatchConfig;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &SwatchConfig) {
    let mut by_lowercase: BTreeMap<String, Vec<&str>> = BTreeMap::new();

    for (name, value) in &config.palette.colors {
        if !is_color_name(name) {
            errors.push(format!("palette name '{name}' must contain only letters"));
        }
        // Names are not allowed as values so lookups never chain.
        if !validate_color(value) {
            errors.push(format!(
                "palette.{name} = '{value}' is not a hex, rgb() or rgba() color"
            ));
        }
        by_lowercase
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(name);
    }

    // Lookups ignore case, so `Red` and `red` would shadow each other.
    for names in by_lowercase.values().filter(|names| names.len() > 1) {
        errors.push(format!(
            "palette names {} differ only in case",
            names.join(", ")
        ));
    }
}
