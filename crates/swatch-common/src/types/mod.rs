mod color;
mod input;
mod policy;


pub use color::*;
pub use input::*;
pub use policy::*;
