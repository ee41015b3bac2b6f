//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use dever_common::Rect;
use dever_webview::wry_backend::to_wry_rect;
use dever_webview::CloseAction;

use super::core::DeverApp;
use super::layout::{content_rect, full_bounds};

impl ApplicationHandler for DeverApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.handle_close_request();
                if self.should_exit {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                    self.handle_resize(content_rect(size, scale));
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(size) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.handle_resize(content_rect(size, scale_factor));
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
        if self.should_exit {
            event_loop.exit();
        }
    }
}

impl DeverApp {
    fn handle_resize(&mut self, content: Rect) {
        if let Some(view) = &self.main_view {
            if let Err(e) = view.set_bounds(to_wry_rect(full_bounds(&content))) {
                tracing::warn!(error = %e, "failed to resize main UI");
            }
        }
        if let Some(manager) = self.manager.as_mut() {
            manager.on_resize(content);
        }
    }

    /// Hide or tear down, depending on force-quit and window visibility.
    pub(super) fn handle_close_request(&mut self) {
        let action = match self.manager.as_mut() {
            Some(manager) => manager.on_close_requested(),
            None => CloseAction::Destroy,
        };

        match action {
            CloseAction::Hide => {
                if let Some(window) = &self.window {
                    window.set_visible(false);
                }
                tracing::info!("window hidden");
            }
            CloseAction::Destroy => {
                self.shutdown();
                self.should_exit = true;
            }
        }
    }
}
