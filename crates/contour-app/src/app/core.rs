//! ContourApp struct definition, constructor, and shutdown.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use winit::window::Window;

use contour_common::ThemeMode;
use contour_config::schema::ContourConfig;
use contour_renderer::{FrameTimer, RenderState};

use crate::cli::Args;

/// Top-level application state.
pub struct ContourApp {
    pub(super) config: ContourConfig,
    /// Path override from the command line, `None` for the default location.
    pub(super) config_path: Option<PathBuf>,
    /// Theme mode currently displayed. Flows into every frame tick.
    pub(super) mode: ThemeMode,
    pub(super) force_fullscreen: bool,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Frame pacing
    pub(super) start: Instant,
    pub(super) frame_timer: FrameTimer,

    // Live config reload
    pub(super) config_rx: Option<watch::Receiver<ContourConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl ContourApp {
    pub fn new(config: ContourConfig, args: &Args) -> Self {
        let frame_timer = FrameTimer::new(Duration::from_secs(
            config.animation.fps_log_interval_secs,
        ));

        Self {
            config_path: args.config.as_deref().map(PathBuf::from),
            mode: config.theme.mode,
            force_fullscreen: args.fullscreen,
            window: None,
            render_state: None,
            start: Instant::now(),
            frame_timer,
            config_rx: None,
            tokio_runtime: None,
            should_exit: false,
            config,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Perform graceful shutdown.
    ///
    /// The watch receiver is dropped before the runtime so the reload task
    /// stops promptly.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.config_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        // Release GPU resources
        self.render_state = None;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args() -> Args {
        Args {
            config: None,
            log_level: None,
            fullscreen: false,
            print_config: false,
        }
    }

    #[test]
    fn new_starts_without_window_or_runtime() {
        let app = ContourApp::new(ContourConfig::default(), &test_args());

        assert!(app.window.is_none());
        assert!(app.render_state.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(!app.should_exit);
        assert_eq!(app.mode, ThemeMode::Dark);
    }

    #[test]
    fn new_respects_configured_light_mode() {
        let mut config = ContourConfig::default();
        config.theme.mode = ThemeMode::Light;
        let app = ContourApp::new(config, &test_args());

        assert_eq!(app.mode, ThemeMode::Light);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = ContourApp::new(ContourConfig::default(), &test_args());

        app.shutdown();
        app.shutdown();

        assert!(app.tokio_runtime.is_none());
        assert!(app.config_rx.is_none());
        assert!(app.render_state.is_none());
    }
}
