//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#1e1e1e").unwrap();
    assert_eq!(c, Color::from_rgba(30, 30, 30, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#d4d4d480").unwrap();
    assert_eq!(c, Color::from_rgba(212, 212, 212, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_hex_uppercase_with_whitespace() {
    let c = parse_color("  #FFCC00 ").unwrap();
    assert_eq!(c, Color::opaque(255, 204, 0));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c, Color::from_rgba(0, 212, 255, 31));
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(10,20,30,128)").unwrap();
    assert_eq!(c.a, 128);
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    let c = parse_color("rgb(1, 2, 3)").unwrap();
    assert_eq!(c, Color::opaque(1, 2, 3));
}

#[test]
fn parse_rgba_with_spaces() {
    let c = parse_color("rgba( 100 , 180 , 255 , 0.9 )").unwrap();
    // 0.9 * 255 = 229.5 -> 230
    assert_eq!(c, Color::from_rgba(100, 180, 255, 230));
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
    assert!(parse_color("rgba(0,0,0,256)").is_err());
}

#[test]
fn bare_names_and_short_functional_forms_are_rejected() {
    assert!(parse_color("").is_err());
    assert!(parse_color("red").is_err());
    assert!(parse_color("rgb(10,20)").is_err());
}

#[test]
fn default_theme_colors_round_trip_through_hex() {
    let theme = crate::schema::ThemeConfig::default();
    for color in [theme.background, theme.diff_add, theme.diagnostic_info] {
        assert_eq!(parse_color(&color.to_hex()).unwrap(), color);
    }
}
