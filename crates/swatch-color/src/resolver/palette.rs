//! Config palette resolver.

use swatch_config::PaletteConfig;

use super::{CssNamedColors, NamedColorResolver};

/// Looks names up in a user palette first, then in a fallback resolver.
#[derive(Debug, Clone, Default)]
pub struct PaletteResolver<R = CssNamedColors> {
    palette: PaletteConfig,
    fallback: R,
}

impl<R: NamedColorResolver> PaletteResolver<R> {
    pub fn new(palette: PaletteConfig, fallback: R) -> Self {
        Self { palette, fallback }
    }

    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }
}

impl<R: NamedColorResolver> NamedColorResolver for PaletteResolver<R> {
    fn resolve(&self, name: &str) -> Option<String> {
        match self.palette.get(name) {
            Some(value) => Some(value.to_owned()),
            None => self.fallback.resolve(name),
        }
    }
}
