//! Window geometry in the logical units surfaces are laid out in.

use winit::dpi::PhysicalSize;

use dever_common::{Rect, ViewBounds};

/// Content area of a window with the given physical size and scale factor.
pub fn content_rect(size: PhysicalSize<u32>, scale_factor: f64) -> Rect {
    let logical = size.to_logical::<f64>(scale_factor);
    Rect::new(0.0, 0.0, logical.width, logical.height)
}

/// Bounds covering the whole content area.
pub fn full_bounds(content: &Rect) -> ViewBounds {
    ViewBounds::from_rect(content)
}
