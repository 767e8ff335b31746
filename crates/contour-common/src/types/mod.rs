mod color;
mod theme;

pub use color::*;
pub use theme::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_from_hex_6() {
        let c = Rgb::from_hex("#1a1b26").unwrap();
        assert_eq!(c, Rgb::new(26, 27, 38));
    }

    #[test]
    fn rgb_from_hex_3() {
        // Shorthand digits double: #abc == #aabbcc.
        let c = Rgb::from_hex("#abc").unwrap();
        assert_eq!(c, Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn rgb_from_hex_no_hash() {
        let c = Rgb::from_hex("00ff00").unwrap();
        assert_eq!(c, Rgb::new(0, 255, 0));
    }

    #[test]
    fn rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("zzzzzz").is_none());
        assert!(Rgb::from_hex("#ab").is_none());
        assert!(Rgb::from_hex("#abcd").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn rgb_from_rgb_string() {
        let c = Rgb::from_rgb_string("rgb(17, 17, 17)").unwrap();
        assert_eq!(c, Rgb::new(17, 17, 17));
    }

    #[test]
    fn rgb_from_rgb_string_no_spaces() {
        let c = Rgb::from_rgb_string("rgb(10,20,30)").unwrap();
        assert_eq!(c, Rgb::new(10, 20, 30));
    }

    #[test]
    fn rgb_from_rgb_string_invalid() {
        assert!(Rgb::from_rgb_string("rgba(10,20,30,255)").is_none());
        assert!(Rgb::from_rgb_string("rgb(10,20)").is_none());
        assert!(Rgb::from_rgb_string("rgb(10,20,30,40)").is_none());
        assert!(Rgb::from_rgb_string("rgb(300,0,0)").is_none());
    }

    #[test]
    fn rgb_to_hex() {
        let c = Rgb::new(255, 0, 128);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn rgb_roundtrip_hex() {
        let original = Rgb::new(171, 205, 239);
        let parsed = Rgb::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn rgb_to_normalized() {
        let c = Rgb::new(255, 0, 51);
        let n = c.to_normalized();
        assert!((n[0] - 1.0).abs() < f32::EPSILON);
        assert!(n[1].abs() < f32::EPSILON);
        assert!((n[2] - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn theme_mode_toggled() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn theme_mode_serialization() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let deserialized: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(deserialized, ThemeMode::Light);
    }
}
