use contour_common::ThemeMode;

use crate::gpu::PhysicalSize;

/// Snapshot of everything the animation reads from the outside world for
/// one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Frame timestamp in milliseconds. Any monotonic origin works.
    pub timestamp_ms: f64,
    /// Window size in physical pixels.
    pub size: PhysicalSize,
    /// Physical pixels per logical pixel.
    pub scale_factor: f64,
    /// Theme the host is currently displaying.
    pub mode: ThemeMode,
}

/// What a frame tick asks the caller to do before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickResult {
    /// New physical size to reconfigure the surface with, if it changed.
    pub resize: Option<PhysicalSize>,
}
