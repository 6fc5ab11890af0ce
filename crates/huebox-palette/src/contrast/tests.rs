//! Tests for contrast-color selection.

use super::*;

#[test]
fn black_background_gets_white_text() {
    assert_eq!(contrasting_color("#000000").unwrap(), "#FFF");
}

#[test]
fn white_background_gets_black_text() {
    assert_eq!(contrasting_color("#FFFFFF").unwrap(), "#000");
}

#[test]
fn shorthand_hex_matches_full_hex() {
    assert_eq!(
        contrasting_color("#fff").unwrap(),
        contrasting_color("#ffffff").unwrap()
    );
    assert_eq!(
        contrasting_color("#abc").unwrap(),
        contrasting_color("#aabbcc").unwrap()
    );
}

#[test]
fn hex_without_hash() {
    assert_eq!(contrasting_color("ffffff").unwrap(), "#000");
    assert_eq!(contrasting_color("000").unwrap(), "#FFF");
}

#[test]
fn rgb_string_white() {
    assert_eq!(contrasting_color("rgb(255, 255, 255)").unwrap(), "#000");
}

#[test]
fn rgb_string_black() {
    assert_eq!(contrasting_color("rgb(0, 0, 0)").unwrap(), "#FFF");
}

#[test]
fn rgb_string_loose_spacing() {
    assert_eq!(contrasting_color("rgb(  255,255 , 255 )").unwrap(), "#000");
}

#[test]
fn invalid_color_is_rejected() {
    let err = contrasting_color("not-a-color").unwrap_err();
    assert!(matches!(
        err,
        ColorError::InvalidColor(ref s) if s == "not-a-color"
    ));
}

#[test]
fn five_digit_hex_is_rejected() {
    assert!(contrasting_color("#12345").is_err());
    assert!(contrasting_color("#zzzzzz").is_err());
}

#[test]
fn eight_char_hex_lands_on_rgb_path() {
    // #RRGGBBAA is longer than 7 chars, so the length dispatch sends it
    // down the rgb path, where it cannot match.
    assert!(contrasting_color("#11223344").is_err());
}

#[test]
fn custom_threshold_flips_the_choice() {
    assert_eq!(
        contrasting_color_with_threshold("#bababa", 100.0).unwrap(),
        "#000"
    );
    assert_eq!(
        contrasting_color_with_threshold("#bababa", 250.0).unwrap(),
        "#FFF"
    );
}

#[test]
fn mid_gray_uses_light_text_at_default_threshold() {
    // luminance of #888888 is 136, below the 186 default
    assert_eq!(contrasting_color("#888888").unwrap(), "#FFF");
}
