//! Theme sub-config validation.

use crate::colors::validate_color;
use crate::schema::ContourConfig;

/// Validate that every theme variable is a recognized color format.
pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &ContourConfig) {
    let vars = &config.theme.variables;
    for (name, value) in [
        ("theme.variables.background", &vars.background),
        ("theme.variables.dark_background", &vars.dark_background),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = \"{value}\" is not a recognized color"));
        }
    }
}
