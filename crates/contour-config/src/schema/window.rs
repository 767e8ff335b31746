//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance and startup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width in pixels.
    pub width: u32,
    /// Initial logical height in pixels.
    pub height: u32,
    pub startup_mode: StartupMode,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Contour".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            decorations: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
