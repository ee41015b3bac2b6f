use std::sync::{Arc, Mutex};

use dever_common::{ViewBounds, ViewError};
use tracing::debug;
use wry::WebView;

use crate::surface::{HistoryState, Surface, SurfaceId};

use super::to_wry_rect;

pub struct WrySurface {
    pub(super) id: SurfaceId,
    pub(super) webview: WebView,
    /// Written by the IPC handler whenever the page reports a navigation.
    pub(super) history: Arc<Mutex<HistoryState>>,
    /// Last URL we asked for, used when the engine cannot report one.
    pub(super) requested_url: String,
}

impl Surface for WrySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn url(&self) -> String {
        self.webview
            .url()
            .unwrap_or_else(|_| self.requested_url.clone())
    }

    fn history(&self) -> HistoryState {
        self.history.lock().map(|h| *h).unwrap_or_default()
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        self.requested_url = url.to_string();
        self.webview
            .load_url(url)
            .map_err(|e| ViewError::Navigation(format!("{url}: {e}")))
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.webview
            .reload()
            .map_err(|e| ViewError::Navigation(e.to_string()))
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        self.webview
            .evaluate_script("history.back();")
            .map_err(|e| ViewError::Script(e.to_string()))
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        self.webview
            .evaluate_script("history.forward();")
            .map_err(|e| ViewError::Script(e.to_string()))
    }

    fn set_bounds(&mut self, bounds: ViewBounds) -> Result<(), ViewError> {
        self.webview
            .set_bounds(to_wry_rect(bounds))
            .map_err(|e| ViewError::Bounds(e.to_string()))
    }

    fn set_attached(&mut self, attached: bool) -> Result<(), ViewError> {
        self.webview
            .set_visible(attached)
            .map_err(|e| ViewError::Visibility(e.to_string()))?;
        if !attached {
            // Keep keyboard input from landing in a hidden page.
            returned_focus(self.id, self.webview.focus_parent());
        }
        Ok(())
    }
}

/// Hiding still succeeds when the parent cannot take focus back; the
/// failure is logged. Returns whether focus was handed back.
fn returned_focus<E: std::fmt::Display>(surface: SurfaceId, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(surface = %surface, error = %e, "failed to return focus to host window");
            false
        }
    }
}

impl Drop for WrySurface {
    fn drop(&mut self) {
        debug!(surface = %self.id, "releasing webview");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_failure_is_absorbed() {
        assert!(returned_focus::<String>(SurfaceId(1), Ok(())));
        assert!(!returned_focus(SurfaceId(1), Err("no parent window")));
    }
}
