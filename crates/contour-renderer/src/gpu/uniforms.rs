use contour_common::ThemeMode;
use contour_config::colors::parse_color;
use contour_config::schema::ContourConfig;

/// Background used when the configured theme variable fails to parse.
pub(crate) const FALLBACK_BG: [f32; 3] = [21.0 / 255.0, 23.0 / 255.0, 59.0 / 255.0];

/// Contour line multiplier for a theme mode: lines brighten the background
/// in dark mode and darken it in light mode.
pub fn mult_for(mode: ThemeMode) -> f32 {
    match mode {
        ThemeMode::Dark => 1.0,
        ThemeMode::Light => -1.0,
    }
}

/// Per-frame uniform block for the contour shader.
///
/// Layout matches the 32-byte uniform struct in `shaders/contour.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ContourUniforms {
    /// Viewport size in logical pixels.
    pub resolution: [f32; 2],
    /// Animation clock, in effect units rather than seconds.
    pub time: f32,
    /// Line contribution sign, see [`mult_for`].
    pub color_mult: f32,
    /// Background color as normalized sRGB.
    pub bg_color: [f32; 3],
    pub _padding: f32,
}

impl ContourUniforms {
    /// Build the initial uniform state from configuration.
    ///
    /// The clock starts at the configured offset. The background comes from
    /// the theme variable for the active mode, falling back to a built-in
    /// deep blue if that variable does not parse.
    pub fn from_config(config: &ContourConfig) -> Self {
        let mode = config.theme.mode;
        let bg_color = parse_color(config.theme.variables.for_mode(mode))
            .map(|c| c.to_normalized())
            .unwrap_or(FALLBACK_BG);

        Self {
            resolution: [0.0, 0.0],
            time: config.animation.time_offset,
            color_mult: mult_for(mode),
            bg_color,
            _padding: 0.0,
        }
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    pub fn set_background(&mut self, rgb: [f32; 3]) {
        self.bg_color = rgb;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
