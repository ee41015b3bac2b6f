//! Content-area geometry for embedded surfaces.
//!
//! Pure functions: called at creation time and on every host resize.

use dever_common::{Rect, ViewBounds};

/// Toolbar height assumed when the UI has not measured one yet.
pub const DEFAULT_TOOLBAR_HEIGHT: f64 = 40.0;

/// Fallback for the modal slot.
pub const DEFAULT_MODAL_TOOLBAR_HEIGHT: f64 = 48.0;

/// Area of `container` below a toolbar of `toolbar_height` pixels, rounded
/// to integer device units.
pub fn content_bounds(container: &Rect, toolbar_height: Option<f64>) -> ViewBounds {
    content_bounds_with_default(container, toolbar_height, DEFAULT_TOOLBAR_HEIGHT)
}

/// Like [`content_bounds`] with an explicit fallback height.
///
/// A missing, zero, negative or non-finite measurement means the toolbar has
/// not been laid out yet; `fallback` is used instead. Height never goes below 0.
pub fn content_bounds_with_default(
    container: &Rect,
    toolbar_height: Option<f64>,
    fallback: f64,
) -> ViewBounds {
    let toolbar = toolbar_height
        .filter(|h| h.is_finite() && *h > 0.0)
        .unwrap_or(fallback);

    ViewBounds::from_rect(&Rect {
        x: container.x,
        y: container.y + toolbar,
        width: container.width.max(0.0),
        height: (container.height - toolbar).max(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_measured_toolbar() {
        let b = content_bounds(&Rect::new(200.0, 0.0, 800.0, 600.0), Some(36.0));
        assert_eq!(b, ViewBounds::new(200, 36, 800, 564));
    }

    #[test]
    fn missing_measurement_uses_default() {
        let b = content_bounds(&Rect::new(0.0, 0.0, 400.0, 600.0), None);
        assert_eq!(b, ViewBounds::new(0, 40, 400, 560));
    }

    #[test]
    fn zero_measurement_counts_as_unmeasured() {
        let b = content_bounds_with_default(&Rect::new(0.0, 0.0, 400.0, 600.0), Some(0.0), 48.0);
        assert_eq!(b, ViewBounds::new(0, 48, 400, 552));
    }

    #[test]
    fn nan_measurement_counts_as_unmeasured() {
        let b = content_bounds(&Rect::new(0.0, 0.0, 400.0, 600.0), Some(f64::NAN));
        assert_eq!(b.y, 40);
    }

    #[test]
    fn rounds_fractional_geometry() {
        let b = content_bounds(&Rect::new(12.6, 8.0, 640.4, 480.7), Some(40.0));
        assert_eq!(b, ViewBounds::new(13, 48, 640, 441));
    }

    #[test]
    fn short_container_clamps_height_to_zero() {
        let b = content_bounds(&Rect::new(0.0, 0.0, 400.0, 20.0), None);
        assert_eq!(b.height, 0);
        assert_eq!(b.y, 40);
    }

    #[test]
    fn negative_width_clamps_to_zero() {
        let b = content_bounds(&Rect::new(0.0, 0.0, -10.0, 600.0), Some(40.0));
        assert_eq!(b.width, 0);
    }
}
