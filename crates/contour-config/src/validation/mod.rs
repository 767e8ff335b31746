//! Full configuration validation.
//!
//! Validates window dimensions, theme color formats, and animation
//! timing. Each domain has its own submodule; this orchestrator calls
//! them all and collects errors into a single `ConfigError`.

mod animation;
mod helpers;
mod theme;
mod window;


use crate::schema::ContourConfig;
use contour_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ContourConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    theme::validate_theme(&mut errors, config);
    animation::validate_animation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
