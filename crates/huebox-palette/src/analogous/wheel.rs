//! Built-in hue wheel.

use huebox_common::Color;
use tracing::warn;

/// Degrees between adjacent stops on the wheel (360° / 30 slices).
const STEP_DEGREES: f64 = 12.0;

/// Rotate `seed` around the hue wheel, returning `count` variants as
/// lowercase `#rrggbb` strings ordered most similar first (+12°, +24°, …).
///
/// A seed that parses as neither hex nor `rgb()` yields an empty
/// sequence.
pub fn hue_wheel(seed: &str, count: usize) -> Vec<String> {
    let Some(color) = parse_seed(seed) else {
        warn!("skipping unparseable seed color: {seed}");
        return Vec::new();
    };

    let hsl = color.to_hsl();
    (1..=count)
        .map(|i| {
            let rotated = hsl.with_hue(hsl.h + STEP_DEGREES * i as f64);
            Color::from_hsl(rotated).to_hex()
        })
        .collect()
}

fn parse_seed(seed: &str) -> Option<Color> {
    let seed = seed.trim();
    if seed.starts_with("rgb(") {
        Color::from_rgb_string(seed)
    } else {
        Color::from_hex(seed)
    }
}
