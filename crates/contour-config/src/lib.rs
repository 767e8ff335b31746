//! Contour configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contour_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use reload::ReloadManager;
pub use schema::ContourConfig;
pub use watcher::ConfigWatcher;

use contour_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// if none exists. Validation problems are logged by the loader; the
/// parsed config is returned either way.
pub fn load_config() -> Result<ContourConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ContourConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ContourConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"animation\""));
    }

    #[test]
    fn config_to_json_contains_theme_variables() {
        let config = ContourConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"#1a1b26\""));
        assert!(json.contains("\"#d5d6db\""));
        assert!(json.contains("\"dark\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ContourConfig::default();
        let json = config_to_json(&config);
        let parsed: ContourConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.title, "Contour");
        assert_eq!(parsed.theme.variables.dark_background, "#1a1b26");
        assert!((parsed.animation.time_offset - 20.0).abs() < f32::EPSILON);
    }
}
