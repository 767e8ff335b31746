//! Window sub-config validation.

use crate::schema::ContourConfig;

use super::helpers::validate_nonzero;

/// Validate window dimension constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ContourConfig) {
    validate_nonzero(errors, "window.width", config.window.width);
    validate_nonzero(errors, "window.height", config.window.height);
}
