use std::sync::Arc;
use winit::window::Window;

use contour_config::schema::ContourConfig;

use crate::contour::{ContourPipeline, ContourScene, FrameInput};
use crate::gpu::{GpuContext, PhysicalSize, RendererError};

/// Core rendering state holding the GPU context and the contour scene.
///
/// A frame is driven entirely by [`render_frame`]: the scene tick decides
/// whether the surface needs reconfiguring, updates the uniforms, and the
/// resulting pass clears and draws in one go.
///
/// [`render_frame`]: RenderState::render_frame
pub struct RenderState {
    pub gpu: GpuContext,
    pub scene: ContourScene,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &ContourConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let mut scene = ContourScene::new(config, gpu.size, gpu.scale_factor);
        scene.pipeline = Some(ContourPipeline::new(&gpu.device, gpu.format()));

        Ok(Self { gpu, scene })
    }

    /// Reconfigure the surface at its current size, recovering from a lost
    /// or outdated surface.
    pub fn reconfigure_surface(&mut self) {
        let PhysicalSize { width, height } = self.gpu.size;
        self.gpu.resize(width, height);
    }

    /// Advance the animation one frame and draw it.
    pub fn render_frame(&mut self, input: &FrameInput) -> Result<(), RendererError> {
        let tick = self.scene.tick(input);
        if let Some(size) = tick.resize {
            self.gpu.resize(size.width, size.height);
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("contour frame encoder"),
            });

        let clear = self.scene.clear_color();
        match &self.scene.pipeline {
            Some(pipeline) => {
                pipeline.update_uniforms(&self.gpu.queue, &self.scene.uniforms);
                pipeline.render(&mut encoder, &view, Some(clear));
            }
            None => {
                // Without a pipeline the frame still clears to the
                // background color.
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("contour clear pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        super::helpers::log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
