//! Production surfaces: child `wry::WebView`s of the host window.
//!
//! wry reports no session history, so each embedded page runs
//! [`NAV_REPORT_SCRIPT`](crate::ipc::NAV_REPORT_SCRIPT), which posts its URL and
//! back/forward ability over IPC on every navigation.

mod factory;
mod handlers;
mod main_view;
mod surface;

pub use factory::WrySurfaceFactory;
pub use main_view::{build_main_webview, MainContent};
pub use surface::WrySurface;

use dever_common::ViewBounds;

/// Settings shared by every embedded surface.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    pub user_agent: Option<String>,
    pub devtools: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Slot bounds in wry's rect type (logical pixels).
pub fn to_wry_rect(bounds: ViewBounds) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            bounds.x as f64,
            bounds.y as f64,
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            bounds.width as f64,
            bounds.height as f64,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_is_logical() {
        let rect = to_wry_rect(ViewBounds::new(0, 40, 400, 560));
        match (rect.position, rect.size) {
            (wry::dpi::Position::Logical(p), wry::dpi::Size::Logical(s)) => {
                assert_eq!((p.x, p.y), (0.0, 40.0));
                assert_eq!((s.width, s.height), (400.0, 560.0));
            }
            other => panic!("expected logical rect, got {other:?}"),
        }
    }
}
