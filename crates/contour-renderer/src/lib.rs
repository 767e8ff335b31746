pub mod contour;
pub mod gpu;
pub mod perf;
pub mod render_state;

pub use contour::{ContourPipeline, ContourScene, FrameInput, TickResult};
pub use gpu::{ContourUniforms, GpuContext, PhysicalSize, RendererError};
pub use perf::FrameTimer;
pub use render_state::RenderState;
