//! Window creation, renderer initialization, and reload watcher startup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use contour_config::schema::StartupMode;
use contour_config::ReloadManager;
use contour_renderer::RenderState;

use super::core::ContourApp;

impl ContourApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;

        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ))
            .with_decorations(window_config.decorations);

        let fullscreen =
            self.force_fullscreen || window_config.startup_mode == StartupMode::Fullscreen;
        let attrs = if fullscreen {
            attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
        } else if window_config.startup_mode == StartupMode::Maximized {
            attrs.with_maximized(true)
        } else {
            attrs
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone(), &self.config)) {
            Ok(rs) => {
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Start the config file watcher on a background tokio runtime.
    ///
    /// The initial config snapshot from the manager is dropped; the one
    /// loaded at startup is already in effect.
    pub(super) fn start_reload(&mut self) {
        let config_path = match self.config_path.clone() {
            Some(path) => path,
            None => match contour_config::toml_loader::default_config_path() {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("Config reload disabled, no config directory: {e}");
                    return;
                }
            },
        };

        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => {
                let (_initial, rx) = rt.block_on(ReloadManager::start(config_path));
                self.config_rx = Some(rx);
                self.tokio_runtime = Some(rt);
                tracing::info!("Config reload watcher started");
            }
            Err(e) => {
                tracing::error!("Failed to create tokio runtime, live config reload disabled: {e}");
            }
        }
    }
}
