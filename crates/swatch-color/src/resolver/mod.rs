//! Named color resolution.
//!
//! The parser never knows color names itself. It asks a
//! [`NamedColorResolver`] to turn a bare word into a literal color string
//! (`rgb(...)`, `rgba(...)` or hex) and parses that instead.

mod css_names;
mod palette;


pub use css_names::CssNamedColors;
pub use palette::PaletteResolver;

/// Resolves a bare color name to a literal color string.
///
/// Returning `None` means the name is unknown.
pub trait NamedColorResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> NamedColorResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// A resolver that knows no names at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNamedColors;

impl NamedColorResolver for NoNamedColors {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}
