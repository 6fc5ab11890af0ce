//! Alpha-suffix helper.

use huebox_common::{ColorError, Result};

/// Append a two-digit uppercase hex alpha suffix to a color string.
///
/// `opacity` must be in 0.0-1.0. The suffix is appended verbatim; the
/// color argument itself is not re-validated.
pub fn add_alpha(color: &str, opacity: f64) -> Result<String> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(ColorError::InvalidOpacity(opacity));
    }
    let alpha = (opacity * 255.0).round() as u8;
    Ok(format!("{color}{alpha:02X}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_opacity() {
        assert_eq!(add_alpha("#123456", 1.0).unwrap(), "#123456FF");
    }

    #[test]
    fn zero_opacity() {
        assert_eq!(add_alpha("#123456", 0.0).unwrap(), "#12345600");
    }

    #[test]
    fn half_opacity_rounds() {
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(add_alpha("#123456", 0.5).unwrap(), "#12345680");
    }

    #[test]
    fn small_opacity_is_zero_padded() {
        // 0.02 * 255 = 5.1 -> 5 -> "05"
        assert_eq!(add_alpha("#123456", 0.02).unwrap(), "#12345605");
    }

    #[test]
    fn opacity_above_one_is_rejected() {
        let err = add_alpha("#123456", 1.5).unwrap_err();
        assert!(matches!(err, ColorError::InvalidOpacity(v) if v == 1.5));
    }

    #[test]
    fn negative_opacity_is_rejected() {
        assert!(add_alpha("#123456", -0.1).is_err());
    }

    #[test]
    fn nan_opacity_is_rejected() {
        assert!(add_alpha("#123456", f64::NAN).is_err());
    }

    #[test]
    fn color_argument_is_not_validated() {
        // purely textual concatenation
        assert_eq!(add_alpha("tomato", 1.0).unwrap(), "tomatoFF");
    }
}
