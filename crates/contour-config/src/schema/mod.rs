//! Configuration schema types for Contour.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching current behavior.

mod animation;
mod theme;
mod window;

pub use animation::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Contour.
///
/// All options have sensible defaults. Only override what you want to
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ContourConfig {
    pub window: WindowConfig,
    pub theme: ThemeConfig,
    pub animation: AnimationConfig,
}

// =============================================================================
// Tests
// =============================================================================
