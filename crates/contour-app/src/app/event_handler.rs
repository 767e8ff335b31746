//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use contour_config::schema::ContourConfig;
use contour_renderer::{FrameInput, FrameTimer, PhysicalSize};

use super::core::ContourApp;

impl ApplicationHandler for ContourApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_reload();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                // The frame tick reads the live window geometry, so a
                // redraw is all that is needed here.
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }

        // Continuous animation: poll for a reloaded config, request the
        // next frame, and keep the loop spinning. Vsync paces the frames.
        self.apply_pending_reload();
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Poll);
    }
}

impl ContourApp {
    /// Process a key press: theme toggle and exit keys.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        match logical_key {
            Key::Named(NamedKey::Escape) => {
                self.should_exit = true;
            }
            Key::Character(c) => match c.as_str() {
                "q" => self.should_exit = true,
                "t" => {
                    self.mode = self.mode.toggled();
                    tracing::info!("Theme switched to {:?} mode", self.mode);
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Apply a freshly reloaded config if the watcher delivered one.
    fn apply_pending_reload(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }

        let config = rx.borrow_and_update().clone();
        self.adopt_config(config);
    }

    /// Swap in a new configuration at runtime.
    ///
    /// The configured theme mode wins over a runtime toggle; the next frame
    /// tick picks up the change and re-samples the background.
    fn adopt_config(&mut self, config: ContourConfig) {
        self.mode = config.theme.mode;
        self.frame_timer = FrameTimer::new(Duration::from_secs(
            config.animation.fps_log_interval_secs,
        ));

        if let Some(ref window) = self.window {
            window.set_title(&config.window.title);
            window.set_decorations(config.window.decorations);
        }
        if let Some(ref mut rs) = self.render_state {
            rs.scene.apply_config(&config);
        }

        self.config = config;
        tracing::info!("Configuration reloaded");
    }

    /// Advance the animation one frame and draw it.
    fn render_frame(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let size = window.inner_size();
        let input = FrameInput {
            timestamp_ms: self.start.elapsed().as_secs_f64() * 1000.0,
            size: PhysicalSize {
                width: size.width,
                height: size.height,
            },
            scale_factor: window.scale_factor(),
            mode: self.mode,
        };

        match rs.render_frame(&input) {
            Ok(()) => {
                if let Some(fps) = self.frame_timer.record_frame() {
                    tracing::debug!("Average frame rate: {fps:.1} fps");
                }
            }
            Err(e) => {
                tracing::error!("Render error: {e}");
                rs.reconfigure_surface();
            }
        }
    }
}
