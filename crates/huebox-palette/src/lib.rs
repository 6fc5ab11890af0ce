//! Color contrast and palette helpers.
//!
//! Pure string-in/string-out utilities for theming: pick a readable
//! foreground for a background color, generate analogous palettes,
//! append alpha channels, and convert between hex and `rgb()` forms.
//!
//! # Quick Start
//!
//! ```rust
//! use huebox_palette::{add_alpha, contrasting_color};
//!
//! let fg = contrasting_color("#ffcc00").unwrap();
//! assert_eq!(fg, "#000");
//!
//! let overlay = add_alpha("#1e293b", 0.5).unwrap();
//! assert_eq!(overlay, "#1e293b80");
//! ```

pub mod alpha;
pub mod analogous;
pub mod contrast;
pub mod convert;

// Re-export the operation surface for convenience
pub use alpha::add_alpha;
pub use analogous::{analogous_colors, analogous_colors_with, hue_wheel};
pub use contrast::{
    contrasting_color, contrasting_color_with_threshold, DEFAULT_CONTRAST_THRESHOLD,
};
pub use convert::{hex_to_rgb, rgb_to_hex};
