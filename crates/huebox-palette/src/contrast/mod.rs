//! Readable foreground selection against a background color.
//!
//! Accepts `#RGB`/`#RRGGBB` hex (leading `#` optional) and `rgb(r, g, b)`
//! strings, and picks black or white text by perceptual luminance.

mod parse;

#[cfg(test)]
mod tests;

use huebox_common::{ColorError, Result};

/// Luminance cutoff separating light backgrounds (dark text) from dark
/// backgrounds (light text).
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 186.0;

/// Pick a readable foreground for `color` using the default threshold.
pub fn contrasting_color(color: &str) -> Result<&'static str> {
    contrasting_color_with_threshold(color, DEFAULT_CONTRAST_THRESHOLD)
}

/// Pick a readable foreground for `color`: `"#000"` when the background
/// luminance exceeds `threshold`, `"#FFF"` otherwise.
///
/// Inputs longer than 7 characters are parsed as `rgb(r, g, b)`, anything
/// shorter as hex. An 8-character `#RRGGBBAA` string therefore lands on
/// the rgb path and fails; strip the alpha suffix before calling.
pub fn contrasting_color_with_threshold(color: &str, threshold: f64) -> Result<&'static str> {
    let channels = if color.len() > 7 {
        parse::parse_rgb(color)
    } else {
        parse::parse_hex(color)
    };
    let (r, g, b) =
        channels.ok_or_else(|| ColorError::InvalidColor(color.to_string()))?;

    // ITU-R BT.601 luma weights
    let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
    Ok(if luminance > threshold { "#000" } else { "#FFF" })
}
