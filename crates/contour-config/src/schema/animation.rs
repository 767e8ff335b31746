//! Shader animation timing configuration.

use serde::{Deserialize, Serialize};

/// Shader clock settings.
///
/// The clock starts at `time_offset`, advances by the frame delta in
/// milliseconds divided by `time_scale`, and stops once it reaches
/// `time_max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub time_offset: f32,
    pub time_scale: f32,
    pub time_max: f32,
    /// Seconds between frame-rate log lines. 0 disables the report.
    pub fps_log_interval_secs: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_offset: 20.0,
            time_scale: 500.0,
            time_max: 100.0,
            fps_log_interval_secs: 0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_config_defaults() {
        let config = AnimationConfig::default();
        assert!((config.time_offset - 20.0).abs() < f32::EPSILON);
        assert!((config.time_scale - 500.0).abs() < f32::EPSILON);
        assert!((config.time_max - 100.0).abs() < f32::EPSILON);
        assert_eq!(config.fps_log_interval_secs, 0);
    }

    #[test]
    fn animation_config_partial_toml() {
        let toml_str = r#"
time_scale = 250.0
fps_log_interval_secs = 5
"#;
        let config: AnimationConfig = toml::from_str(toml_str).unwrap();
        assert!((config.time_scale - 250.0).abs() < f32::EPSILON);
        assert_eq!(config.fps_log_interval_secs, 5);
        // Defaults preserved
        assert!((config.time_offset - 20.0).abs() < f32::EPSILON);
        assert!((config.time_max - 100.0).abs() < f32::EPSILON);
    }
}
