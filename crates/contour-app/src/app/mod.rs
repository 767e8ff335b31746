//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, theme mode, and the renderer.

mod core;
mod event_handler;
mod init;

pub use core::ContourApp;
