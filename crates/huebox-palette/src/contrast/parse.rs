//! Internal channel extraction for contrast selection.
//!
//! Returns decimal channels as `f64` so out-of-range `rgb()` values pass
//! through to the luminance formula unclamped.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for rgb() color: `rgb(r, g, b)` with decimal channels.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Extract channels from an `rgb(r, g, b)` string.
pub(super) fn parse_rgb(color: &str) -> Option<(f64, f64, f64)> {
    let caps = RGB_RE.captures(color)?;
    let r: f64 = caps[1].parse().ok()?;
    let g: f64 = caps[2].parse().ok()?;
    let b: f64 = caps[3].parse().ok()?;
    Some((r, g, b))
}

/// Extract channels from a 3- or 6-digit hex string, `#` optional.
pub(super) fn parse_hex(color: &str) -> Option<(f64, f64, f64)> {
    let hex = color.strip_prefix('#').unwrap_or(color);

    let hex: String = if hex.len() == 3 {
        // Expand #RGB to #RRGGBB by duplicating each digit
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r as f64, g as f64, b as f64))
}
