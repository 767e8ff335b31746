//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and rgb() string formats
//! into [`Rgb`] values. Not part of the public API.

use contour_common::Rgb;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #rgb or #rrggbb.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for rgb() color with integer components.
pub(crate) static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap());

/// Parse a hex color string (#rgb or #rrggbb).
pub(super) fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 | 6 => Rgb::from_hex(s),
        _ => None,
    }
}

/// Parse an `rgb(r, g, b)` color string.
/// Components outside 0-255 fail the u8 parse and reject the string.
pub(super) fn parse_rgb(s: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Rgb::new(r, g, b))
}
