pub mod errors;
pub mod grammar;
pub mod types;

pub use errors::{ColorError, ConfigError, SwatchError};
pub use types::{ColorInput, EvictionPolicy, Rgba};

pub type Result<T> = std::result::Result<T, SwatchError>;
