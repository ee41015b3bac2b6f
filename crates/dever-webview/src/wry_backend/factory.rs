use std::sync::{Arc, Mutex};

use dever_common::ViewError;
use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::events::EventSink;
use crate::ipc::NAV_REPORT_SCRIPT;
use crate::surface::{HistoryState, Surface, SurfaceFactory, SurfaceRequest};

use super::handlers::{
    attach_nav_report_handler, attach_new_window_handler, attach_page_load_handler, Origin,
};
use super::surface::WrySurface;
use super::{to_wry_rect, SurfaceOptions};

/// Builds child webviews inside the host window `W`.
pub struct WrySurfaceFactory<W> {
    window: Arc<W>,
    sink: EventSink,
    options: SurfaceOptions,
}

impl<W: HasWindowHandle> WrySurfaceFactory<W> {
    pub fn new(window: Arc<W>, sink: EventSink, options: SurfaceOptions) -> Self {
        Self {
            window,
            sink,
            options,
        }
    }
}

impl<W: HasWindowHandle> SurfaceFactory for WrySurfaceFactory<W> {
    fn create(&mut self, request: SurfaceRequest<'_>) -> Result<Box<dyn Surface>, ViewError> {
        let history = Arc::new(Mutex::new(HistoryState::default()));
        let origin = Origin {
            slot: request.slot.clone(),
            surface: request.id,
            sink: self.sink.clone(),
        };

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(request.bounds))
            .with_devtools(self.options.devtools)
            .with_clipboard(true)
            .with_focused(false)
            .with_initialization_script(NAV_REPORT_SCRIPT)
            .with_url(request.url);

        if let Some(ua) = &self.options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_nav_report_handler(builder, origin.clone(), Arc::clone(&history));
        builder = attach_new_window_handler(builder, origin.clone());
        builder = attach_page_load_handler(builder, origin);

        let webview = builder
            .build_as_child(self.window.as_ref())
            .map_err(|e| ViewError::Create(e.to_string()))?;

        debug!(slot = %request.slot, surface = %request.id, url = request.url, "webview built");

        Ok(Box::new(WrySurface {
            id: request.id,
            webview,
            history,
            requested_url: request.url.to_string(),
        }))
    }
}
