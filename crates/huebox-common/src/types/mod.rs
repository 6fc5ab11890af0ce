mod color;
mod hsl;

pub use color::*;
pub use hsl::*;
