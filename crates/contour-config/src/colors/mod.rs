//! Color parsing and validation utilities.
//!
//! Supports the `#rgb`, `#rrggbb`, and `rgb(r, g, b)` formats the theme
//! variables accept. Anything else (`hsl(...)`, named colors) is a
//! parse error the caller is expected to handle, not a crash.

mod parse;

#[cfg(test)]
mod tests;

use contour_common::{ConfigError, Rgb};

use parse::{parse_hex, parse_rgb, HEX_RE, RGB_RE};

/// Parse a color string into an [`Rgb`] triple.
///
/// Accepted formats:
/// - `#rgb` (e.g. `#111`, digits doubled)
/// - `#rrggbb` (e.g. `#1a1b26`)
/// - `rgb(r, g, b)` with decimal components (e.g. `rgb(17, 17, 17)`)
pub fn parse_color(s: &str) -> Result<Rgb, ConfigError> {
    let s = s.trim();

    // Try hex formats first
    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    // Try rgb() format
    if s.starts_with("rgb(") {
        if let Some(color) = parse_rgb(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgb(") {
        return RGB_RE.is_match(s);
    }
    false
}
