//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#1a1b26").unwrap();
    assert_eq!(c, Rgb::new(26, 27, 38));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Rgb::new(255, 0, 0));
}

#[test]
fn parse_hex_3_digit_doubles_nibbles() {
    let c = parse_color("#1ab").unwrap();
    assert_eq!(c, Rgb::new(0x11, 0xaa, 0xbb));
}

#[test]
fn parse_rgb_function() {
    let c = parse_color("rgb(17, 17, 17)").unwrap();
    assert_eq!(c, Rgb::new(17, 17, 17));
}

#[test]
fn parse_rgb_no_spaces() {
    let c = parse_color("rgb(0,212,255)").unwrap();
    assert_eq!(c, Rgb::new(0, 212, 255));
}

#[test]
fn parse_rgb_extra_spaces() {
    let c = parse_color("rgb( 100 , 180 , 255 )").unwrap();
    assert_eq!(c, Rgb::new(100, 180, 255));
}

#[test]
fn parse_color_trims_input() {
    let c = parse_color("  #1a1b26  ").unwrap();
    assert_eq!(c, Rgb::new(26, 27, 38));
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("rgb(300,0,0)").is_err());
    assert!(parse_color("rgb(10,20)").is_err());
}

#[test]
fn parse_color_rejects_css_forms_we_do_not_support() {
    // The formats that crashed the unguarded sampler must error cleanly.
    assert!(parse_color("hsl(200, 50%, 50%)").is_err());
    assert!(parse_color("rebeccapurple").is_err());
    assert!(parse_color("rgba(0, 0, 0, 0.5)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#1a1b26"));
    assert!(validate_color("#f00"));
    assert!(validate_color("rgb(17, 17, 17)"));
    assert!(validate_color("rgb(0,212,255)"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("not-a-color"));
    assert!(!validate_color("#12345")); // 5 digits
    assert!(!validate_color("rgb(10,20)"));
    assert!(!validate_color("hsl(200, 50%, 50%)"));
}

#[test]
fn parse_all_default_variables() {
    // Verify the default theme variables from the schema are parseable
    let vars = crate::schema::ThemeVariables::default();
    for v in [&vars.background, &vars.dark_background] {
        assert!(parse_color(v).is_ok(), "failed to parse default variable: {v}");
    }
}
