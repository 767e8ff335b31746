use contour_common::ThemeMode;
use contour_config::colors::parse_color;
use contour_config::schema::{AnimationConfig, ContourConfig, ThemeVariables};

use crate::gpu::{mult_for, ContourUniforms, PhysicalSize};

use super::clock::FrameClock;
use super::pipeline::ContourPipeline;
use super::types::{FrameInput, TickResult};

/// Animation state for the contour effect.
///
/// Owns the uniform block and applies one frame of updates per [`tick`]:
/// surface sizing, theme sampling, and the animation clock.
///
/// [`tick`]: ContourScene::tick
pub struct ContourScene {
    /// Uniform block uploaded before each draw.
    pub uniforms: ContourUniforms,
    /// Render pipeline, present once a device and surface format exist.
    pub pipeline: Option<ContourPipeline>,
    clock: FrameClock,
    viewport: [f32; 2],
    scale_factor: f64,
    mode: ThemeMode,
    variables: ThemeVariables,
    animation: AnimationConfig,
}

impl ContourScene {
    /// Build the scene from configuration and the window's current size.
    pub fn new(config: &ContourConfig, size: PhysicalSize, scale_factor: f64) -> Self {
        let mut uniforms = ContourUniforms::from_config(config);
        let viewport = size.to_logical(scale_factor);
        uniforms.set_resolution(viewport[0], viewport[1]);

        Self {
            uniforms,
            pipeline: None,
            clock: FrameClock::new(),
            viewport,
            scale_factor,
            mode: config.theme.mode,
            variables: config.theme.variables.clone(),
            animation: config.animation.clone(),
        }
    }

    /// Advance the animation by one frame.
    ///
    /// Order within a frame: surface sizing, then the resolution uniform,
    /// then theme sampling, then the clock.
    pub fn tick(&mut self, input: &FrameInput) -> TickResult {
        let mut result = TickResult::default();

        // A scale factor change rebuilds the backing surface even when the
        // logical size is unchanged.
        if input.scale_factor != self.scale_factor {
            self.scale_factor = input.scale_factor;
            result.resize = Some(input.size);
        }

        let viewport = input.size.to_logical(input.scale_factor);
        if viewport != self.viewport {
            self.viewport = viewport;
            result.resize = Some(input.size);
        }

        // The resolution uniform tracks the logical viewport every frame,
        // not only on resizes.
        self.uniforms.set_resolution(viewport[0], viewport[1]);

        if input.mode != self.mode {
            self.mode = input.mode;
            self.uniforms.color_mult = mult_for(input.mode);
            self.sample_background();
        }

        // No delta on the first frame; the clock starts once a previous
        // timestamp exists. A non-positive scale can reach here through an
        // unvalidated config and must not move the clock at all.
        if let Some(delta_ms) = self.clock.advance(input.timestamp_ms) {
            if self.animation.time_scale > 0.0 && self.uniforms.time < self.animation.time_max {
                let step = (delta_ms.max(0.0) / self.animation.time_scale as f64) as f32;
                self.uniforms.time = (self.uniforms.time + step).min(self.animation.time_max);
            }
        }

        result
    }

    /// Adopt a reloaded configuration.
    ///
    /// Theme variables and animation parameters take effect immediately and
    /// the background is re-sampled for the active mode. The clock keeps its
    /// current value.
    pub fn apply_config(&mut self, config: &ContourConfig) {
        self.variables = config.theme.variables.clone();
        self.animation = config.animation.clone();
        self.sample_background();
    }

    /// Clear color for the render pass, the current background converted to
    /// linear light for the surface.
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.uniforms.bg_color;
        wgpu::Color {
            r: srgb_to_linear(r as f64),
            g: srgb_to_linear(g as f64),
            b: srgb_to_linear(b as f64),
            a: 1.0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Re-read the theme variable for the active mode into the background
    /// uniform. On parse failure the previous color is kept.
    fn sample_background(&mut self) {
        match parse_color(self.variables.for_mode(self.mode)) {
            Ok(color) => self.uniforms.set_background(color.to_normalized()),
            Err(e) => {
                tracing::warn!("keeping previous background, theme variable unusable: {e}");
            }
        }
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
