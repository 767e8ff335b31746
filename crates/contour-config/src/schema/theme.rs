//! Theme configuration: active mode and the background variables.

use contour_common::ThemeMode;
use serde::{Deserialize, Serialize};

/// Background color variables, one per theme mode.
///
/// Values accept `#rgb`, `#rrggbb`, or `rgb(r, g, b)` strings and are
/// re-sampled whenever the active mode flips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeVariables {
    pub background: String,
    pub dark_background: String,
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self {
            background: "#d5d6db".into(),
            dark_background: "#1a1b26".into(),
        }
    }
}

impl ThemeVariables {
    /// The variable consulted for the given mode.
    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Dark => &self.dark_background,
            ThemeMode::Light => &self.background,
        }
    }
}

/// Theme settings: which mode starts active and its color variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub variables: ThemeVariables,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.variables.background, "#d5d6db");
        assert_eq!(config.variables.dark_background, "#1a1b26");
    }

    #[test]
    fn variables_for_mode() {
        let vars = ThemeVariables::default();
        assert_eq!(vars.for_mode(ThemeMode::Dark), "#1a1b26");
        assert_eq!(vars.for_mode(ThemeMode::Light), "#d5d6db");
    }

    #[test]
    fn theme_config_partial_toml() {
        let toml_str = r#"
mode = "light"

[variables]
dark_background = "rgb(17, 17, 17)"
"#;
        let config: ThemeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.variables.dark_background, "rgb(17, 17, 17)");
        // Default preserved
        assert_eq!(config.variables.background, "#d5d6db");
    }
}
