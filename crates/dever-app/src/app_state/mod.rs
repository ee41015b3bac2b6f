//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one host window, the main UI webview, and the view manager
//! that owns every embedded surface.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod layout;
mod polling;
mod shutdown;

pub use core::DeverApp;
